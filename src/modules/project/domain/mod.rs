pub mod entities;
pub mod form;

pub use entities::{CategoryFilter, Project, ProjectCategory, ProjectFields};
pub use form::ProjectForm;
