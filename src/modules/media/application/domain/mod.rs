pub mod object_key;
pub mod upload_policy;

pub use object_key::{extension_for, key_from_public_url, ObjectKey};
pub use upload_policy::{ImageUpload, UploadPolicy, UploadRejection};
