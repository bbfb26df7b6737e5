pub mod message;

pub use message::{ContactForm, ContactMessage, MIN_MESSAGE_CHARS};
