pub mod form;
pub mod routes;

pub use form::{image_error_response, ImageFileForm, ImageUploadForm};
