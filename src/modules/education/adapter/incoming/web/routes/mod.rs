mod create_education;
mod delete_education;
mod list_educations;
mod update_education;

pub use create_education::*;
pub use delete_education::*;
pub use list_educations::*;
pub use update_education::*;
