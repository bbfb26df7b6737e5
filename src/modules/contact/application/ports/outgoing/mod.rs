pub mod email_sender;

pub use email_sender::{EmailSender, SendError, TemplateParams};
