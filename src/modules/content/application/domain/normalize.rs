// src/modules/content/application/domain/normalize.rs
//
// Admin forms carry list fields as free text. These helpers turn that
// text into the arrays stored on the records.

/// One item per line; lines are trimmed and blank ones dropped.
pub fn split_lines(input: &str) -> Vec<String> {
    split_on(input, '\n')
}

/// One item per comma; items are trimmed and empty ones dropped.
pub fn split_commas(input: &str) -> Vec<String> {
    split_on(input, ',')
}

fn split_on(input: &str, separator: char) -> Vec<String> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank optional text (e.g. an empty URL input) becomes `None`.
pub fn blank_to_none(input: Option<String>) -> Option<String> {
    input
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
