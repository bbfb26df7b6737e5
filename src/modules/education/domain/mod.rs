pub mod entities;
pub mod form;

pub use entities::{Education, EducationFields};
pub use form::EducationForm;
