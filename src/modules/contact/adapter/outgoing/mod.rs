pub mod config;
pub mod emailjs_sender;
pub mod smtp_sender;

pub use config::{ContactConfig, ContactTransport, TransportSettings};
pub use emailjs_sender::EmailJsSender;
pub use smtp_sender::SmtpEmailSender;
