use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::HttpResponse;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::media::application::domain::{ImageUpload, UploadRejection};
use crate::modules::media::application::ports::outgoing::StorageError;
use crate::modules::media::application::services::ImageError;
use crate::shared::api::ApiResponse;

/// `POST /api/admin/images` body: the file plus the project it belongs to,
/// when known.
#[derive(MultipartForm)]
pub struct ImageUploadForm {
    pub file: Bytes,
    pub project_id: Option<Text<Uuid>>,
}

impl ImageUploadForm {
    pub fn owner(&self) -> Option<Uuid> {
        self.project_id.as_ref().map(|id| id.0)
    }

    pub fn into_upload(self) -> ImageUpload {
        to_upload(self.file)
    }
}

/// A single image file, for routes where the owner comes from the path.
#[derive(MultipartForm)]
pub struct ImageFileForm {
    pub file: Bytes,
}

impl ImageFileForm {
    pub fn into_upload(self) -> ImageUpload {
        to_upload(self.file)
    }
}

fn to_upload(file: Bytes) -> ImageUpload {
    ImageUpload {
        file_name: file.file_name,
        content_type: file
            .content_type
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string()),
        bytes: file.data.to_vec(),
    }
}

/// OpenAPI description of the multipart body.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadSchema {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    /// Prefixes the object key; "temp" when omitted
    project_id: Option<Uuid>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageFileSchema {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

pub fn image_error_response(err: &ImageError) -> HttpResponse {
    match err {
        ImageError::Rejected(UploadRejection::TooLarge { .. }) => ApiResponse::error(
            actix_web::http::StatusCode::PAYLOAD_TOO_LARGE,
            "FILE_TOO_LARGE",
            &err.to_string(),
        ),
        ImageError::Rejected(rejection) => {
            ApiResponse::bad_request("INVALID_IMAGE", &rejection.to_string())
        }
        ImageError::Storage(StorageError::AlreadyExists(_)) => {
            ApiResponse::conflict("IMAGE_EXISTS", "An object with this name already exists")
        }
        ImageError::Storage(e) => {
            tracing::error!(error = %e, "Image upload failed");
            ApiResponse::bad_gateway("UPLOAD_FAILED", "Image upload failed")
        }
    }
}
