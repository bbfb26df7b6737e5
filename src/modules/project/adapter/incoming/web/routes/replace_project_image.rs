use actix_multipart::form::MultipartForm;
use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::modules::media::adapter::incoming::web::form::{
    image_error_response, ImageFileForm, ImageFileSchema,
};
use crate::modules::project::application::services::ProjectError;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace a project's cover image
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}/image",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body(content = ImageFileSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image replaced", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Not an image or empty", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 413, description = "Larger than 5 MB", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/projects/{id}/image")]
pub async fn replace_project_image_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<ImageFileForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .projects
        .replace_image(path.into_inner(), form.into_upload())
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(ProjectError::Catalog(e)) => catalog_error_response(&e, "Project"),
        Err(ProjectError::Image(e)) => image_error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::project::adapter::incoming::web::routes::{
        create_project_handler, delete_project_handler,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::InMemoryObjectStorage;
    use crate::tests::support::multipart::multipart_body;
    use crate::tests::support::stubs::{admin_bearer, token_verifier_data, StubTokenVerifier};

    #[actix_web::test]
    async fn replace_then_delete_cleans_up_storage() {
        let storage = Arc::new(InMemoryObjectStorage::new());
        let state = TestAppStateBuilder::default()
            .with_object_storage(storage.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data(StubTokenVerifier::accepting(Uuid::new_v4())))
                .service(create_project_handler)
                .service(replace_project_image_handler)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .set_json(json!({"title": "Shop"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        for _ in 0..2 {
            let (content_type, body) = multipart_body("cover.jpg", "image/jpeg", &[1; 8], None);
            let req = test::TestRequest::put()
                .uri(&format!("/api/admin/projects/{}/image", id))
                .insert_header((header::AUTHORIZATION, admin_bearer()))
                .insert_header((header::CONTENT_TYPE, content_type))
                .set_payload(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
        // the first upload was replaced by the second
        assert_eq!(storage.keys().len(), 1);
        assert!(storage.keys()[0].starts_with(&id));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/projects/{}", id))
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
        assert!(storage.keys().is_empty());
    }
}
