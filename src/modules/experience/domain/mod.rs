pub mod entities;
pub mod form;

pub use entities::{Experience, ExperienceFields};
pub use form::ExperienceForm;
