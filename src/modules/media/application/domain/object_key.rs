// src/modules/media/application/domain/object_key.rs

use std::fmt;

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

const SUFFIX_LEN: usize = 7;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Name of an object in the image bucket:
/// `{project-id or "temp"}-{unix millis}-{random suffix}.{extension}`.
///
/// Timestamp plus suffix makes collisions negligible. Content is not
/// hashed, so identical bytes uploaded twice get two keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn generate(owner: Option<Uuid>, extension: &str) -> Self {
        Self::compose(
            owner,
            Utc::now().timestamp_millis(),
            &random_suffix(),
            extension,
        )
    }

    pub fn compose(owner: Option<Uuid>, millis: i64, suffix: &str, extension: &str) -> Self {
        let prefix = owner
            .map(|id| id.to_string())
            .unwrap_or_else(|| "temp".to_string());
        Self(format!("{}-{}-{}.{}", prefix, millis, suffix, extension))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// Extension of the original file name; falls back to the MIME subtype
/// (`image/svg+xml` → `svg`) when the name has none. Only ASCII
/// alphanumerics are kept so the key stays a single path segment.
pub fn extension_for(file_name: Option<&str>, content_type: &str) -> String {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| alphanumeric(ext))
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| {
            content_type
                .split('/')
                .nth(1)
                .and_then(|sub| sub.split(['+', ';']).next())
                .map(alphanumeric)
                .filter(|sub| !sub.is_empty())
                .unwrap_or_else(|| "bin".to_string())
        })
}

fn alphanumeric(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Object key stored at the end of a public URL, without any query string.
pub fn key_from_public_url(url: &str) -> Option<String> {
    url.rsplit('/')
        .next()
        .and_then(|last| last.split('?').next())
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}
