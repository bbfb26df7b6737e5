use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects (admin)
#[utoipa::path(
    get,
    path = "/api/admin/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Projects, newest first", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 502, description = "Backend read failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/projects")]
pub async fn list_projects_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.projects.list().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => catalog_error_response(&e, "Project"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};
    use uuid::Uuid;

    use crate::modules::content::application::ports::outgoing::StoreError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::FailingRecordStore;
    use crate::tests::support::stubs::{admin_bearer, token_verifier_data, StubTokenVerifier};

    #[actix_web::test]
    async fn read_failure_is_surfaced_to_admin() {
        let state = TestAppStateBuilder::default()
            .with_project_store(FailingRecordStore::new(StoreError::Unavailable(
                "connection reset".to_string(),
            )))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data(StubTokenVerifier::accepting(Uuid::new_v4())))
                .service(list_projects_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/projects")
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "REMOTE_READ_ERROR");
    }
}
