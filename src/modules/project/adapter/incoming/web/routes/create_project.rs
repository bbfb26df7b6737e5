use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::{
    catalog_error_response, field_errors_response,
};
use crate::modules::project::domain::{Project, ProjectForm};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a project
///
/// `tags` is comma-separated text; blank URLs are stored as null.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "projects",
    request_body = ProjectForm,
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    form: web::Json<ProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match form.into_inner().into_fields() {
        Ok(f) => f,
        Err(errors) => return field_errors_response(&errors),
    };

    match data.projects.create(fields).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => catalog_error_response(&e, "Project"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::modules::content::application::ports::outgoing::StoreError;
    use crate::modules::project::adapter::incoming::web::routes::list_projects_handler;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::FailingRecordStore;
    use crate::tests::support::stubs::{admin_bearer, token_verifier_data, StubTokenVerifier};

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    fn create_request(body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .set_json(body)
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn created_project_is_listed_with_normalized_tags() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data(StubTokenVerifier::accepting(Uuid::new_v4())))
                .service(create_project_handler)
                .service(list_projects_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            create_request(json!({
                "title": "Shop",
                "tags": "React, Rust ,,",
                "demo_url": "",
                "category": "fullstack"
            }))
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert!(created["data"]["id"].is_string());
        assert_eq!(created["data"]["demo_url"], Value::Null);

        let req = test::TestRequest::get()
            .uri("/api/admin/projects")
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(listed["data"][0]["id"], created["data"]["id"]);
        assert_eq!(listed["data"][0]["tags"], json!(["React", "Rust"]));
        assert_eq!(listed["data"][0]["category"], "fullstack");
    }

    #[actix_web::test]
    async fn backend_rejection_is_remote_write_error() {
        let state = TestAppStateBuilder::default()
            .with_project_store(FailingRecordStore::new(StoreError::Rejected(
                "new row violates row-level security policy".to_string(),
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data(StubTokenVerifier::accepting(Uuid::new_v4())))
                .service(create_project_handler),
        )
        .await;

        let resp = test::call_service(&app, create_request(json!({"title": "Shop"})).to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "REMOTE_WRITE_ERROR");
    }
}
