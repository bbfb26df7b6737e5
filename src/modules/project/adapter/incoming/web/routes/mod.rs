mod create_project;
mod delete_project;
mod list_projects;
mod replace_project_image;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use list_projects::*;
pub use replace_project_image::*;
pub use update_project::*;
