mod project_admin;

pub use project_admin::{ProjectAdminService, ProjectError};
