use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::{
    catalog_error_response, field_errors_response,
};
use crate::modules::experience::domain::{Experience, ExperienceForm};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

/// Create an experience
#[utoipa::path(
    post,
    path = "/api/admin/experiences",
    tag = "experiences",
    request_body = ExperienceForm,
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    form: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match form.into_inner().into_fields() {
        Ok(f) => f,
        Err(errors) => return field_errors_response(&errors),
    };

    match data.experiences.create(fields).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => catalog_error_response(&e, "Experience"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::adapter::incoming::web::routes::list_experiences_handler;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{admin_bearer, token_verifier_data, StubTokenVerifier};
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::json;
    use uuid::Uuid;

    #[actix_web::test]
    async fn creates_and_lists_with_normalized_achievements() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data(StubTokenVerifier::accepting(Uuid::new_v4())))
                .service(create_experience_handler)
                .service(list_experiences_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .set_json(json!({
                "title": "Backend Engineer",
                "company": "Acme",
                "achievements": "Shipped v2\n\n  Cut costs  \n"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/admin/experiences")
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"][0]["title"], "Backend Engineer");
        assert_eq!(body["data"][0]["achievements"], json!(["Shipped v2", "Cut costs"]));
    }

    #[actix_web::test]
    async fn blank_title_is_validation_error() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data(StubTokenVerifier::accepting(Uuid::new_v4())))
                .service(create_experience_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/experiences")
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .set_json(json!({"title": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["details"]["title"].is_string());
    }
}
