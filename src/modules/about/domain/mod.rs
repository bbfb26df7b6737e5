pub mod entities;

pub use entities::{About, AboutFields, AboutForm};
