use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::media::adapter::incoming::web::form::{
    image_error_response, ImageUploadForm, ImageUploadSchema,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_multipart::form::MultipartForm;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UploadedImage {
    /// Public URL to store on the owning record
    #[schema(example = "https://xyz.supabase.co/storage/v1/object/public/project-images/temp-1717171717171-k3j9x0a.png")]
    pub url: String,
}

/// Upload an image
///
/// Stores the file under `{project_id|temp}-{millis}-{suffix}.{ext}` without
/// overwriting and returns its public URL.
#[utoipa::path(
    post,
    path = "/api/admin/images",
    tag = "media",
    request_body(content = ImageUploadSchema, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Uploaded", body = inline(SuccessResponse<UploadedImage>)),
        (status = 400, description = "Not an image or empty", body = ErrorResponse),
        (status = 413, description = "Larger than 5 MB", body = ErrorResponse),
        (status = 502, description = "Storage failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/images")]
pub async fn upload_image_handler(
    admin: AdminUser,
    MultipartForm(form): MultipartForm<ImageUploadForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = form.owner();

    match data.images.upload(form.into_upload(), owner).await {
        Ok(url) => {
            info!(user_id = %admin.user_id, url = %url, "Image uploaded by admin");
            ApiResponse::created(UploadedImage { url })
        }
        Err(e) => image_error_response(&e),
    }
}
