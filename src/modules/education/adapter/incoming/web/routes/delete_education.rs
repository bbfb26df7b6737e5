use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use uuid::Uuid;

/// Delete an education
#[utoipa::path(
    delete,
    path = "/api/admin/educations/{id}",
    tag = "educations",
    params(("id" = Uuid, Path, description = "Education id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such education", body = ErrorResponse),
        (status = 502, description = "Backend rejected the delete", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/educations/{id}")]
pub async fn delete_education_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.educations.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => catalog_error_response(&e, "Education"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, http::StatusCode, test, App};

    use crate::modules::education::domain::EducationFields;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{admin_bearer, token_verifier_data, StubTokenVerifier};

    fn fields(title: &str) -> EducationFields {
        EducationFields {
            degree: title.to_string(),
            institution: "University".to_string(),
            location: String::new(),
            period: "2015 - 2019".to_string(),
            description: String::new(),
            courses: Vec::new(),
        }
    }

    #[actix_web::test]
    async fn deletes_existing_row() {
        let state = TestAppStateBuilder::default().build();
        let existing = state.educations.create(fields("Gone soon")).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .app_data(token_verifier_data(StubTokenVerifier::accepting(Uuid::new_v4())))
                .service(delete_education_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/educations/{}", existing.id))
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(state.educations.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_verifier_data(StubTokenVerifier::accepting(Uuid::new_v4())))
                .service(delete_education_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/educations/{}", Uuid::new_v4()))
            .insert_header((header::AUTHORIZATION, admin_bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EDUCATION_NOT_FOUND");
    }
}
