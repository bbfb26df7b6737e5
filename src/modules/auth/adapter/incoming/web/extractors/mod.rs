pub mod admin;

pub use admin::{bearer_token, AdminUser, LOGIN_PATH};
