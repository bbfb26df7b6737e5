mod responses;

pub use responses::{catalog_error_response, field_errors_response};
