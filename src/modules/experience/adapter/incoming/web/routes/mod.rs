mod create_experience;
mod delete_experience;
mod list_experiences;
mod update_experience;

pub use create_experience::*;
pub use delete_experience::*;
pub use list_experiences::*;
pub use update_experience::*;
