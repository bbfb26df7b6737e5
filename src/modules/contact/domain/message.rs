use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldErrors;

/// Shortest accepted message, counted in characters after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // local@domain.tld, no whitespace
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// The public contact form as submitted.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactForm {
    #[schema(example = "Jane")]
    pub name: String,
    #[schema(example = "jane@x.com")]
    pub email: String,
    #[schema(example = "Hello there, this works")]
    pub message: String,
}

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Checks every field and reports all failures at once.
    pub fn validate(self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("name", &self.name);

        if self.email.trim().is_empty() {
            errors.require("email", &self.email);
        } else if !email_shape().is_match(&self.email) {
            errors.add("email", "Invalid email address");
        }

        if self.message.trim().is_empty() {
            errors.require("message", &self.message);
        } else if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            errors.add(
                "message",
                format!("Message must be at least {} characters", MIN_MESSAGE_CHARS),
            );
        }

        errors.into_result(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email,
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        let msg = form("Jane", "jane@x.com", "Hello there, this works")
            .validate()
            .unwrap();

        assert_eq!(msg.name, "Jane");
        assert_eq!(msg.email, "jane@x.com");
    }

    #[test]
    fn empty_name_is_rejected() {
        let errors = form("   ", "jane@x.com", "Hello there, this works")
            .validate()
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn empty_or_malformed_email_is_rejected() {
        for email in ["", "jane", "jane@x", "jane @x.com", "@x.com", "jane@@x.com"] {
            let errors = form("Jane", email, "Hello there, this works")
                .validate()
                .unwrap_err();
            assert!(errors.get("email").is_some(), "{:?} should fail", email);
        }
    }

    #[test]
    fn short_message_is_rejected() {
        let errors = form("Jane", "jane@x.com", "  too short ").validate();
        // "too short" is 9 characters once trimmed
        assert!(errors.unwrap_err().get("message").is_some());

        assert!(form("Jane", "jane@x.com", "ten chars!").validate().is_ok());
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = ContactForm::default().validate().unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("email"), Some("email is required"));
    }

    #[test]
    fn message_length_counts_characters_not_bytes() {
        assert!(form("Zoé", "zoe@x.fr", "éééééééééé").validate().is_ok());
    }
}
