use actix_web::{get, web, HttpResponse, Responder};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::shared::supabase::{KeyScope, SupabaseClient};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    backend: &'static str,
}

/// Reachability check of the hosted backend.
#[async_trait]
pub trait BackendProbe: Send + Sync {
    async fn ping(&self) -> Result<(), String>;
}

#[async_trait]
impl BackendProbe for SupabaseClient {
    async fn ping(&self) -> Result<(), String> {
        let response = self
            .get(&self.auth_url("health"), KeyScope::Anon)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("auth health returned {}", response.status()))
        }
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the hosted backend answers
#[get("/ready")]
pub async fn readiness(probe: web::Data<Arc<dyn BackendProbe>>) -> impl Responder {
    match probe.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            backend: "ok",
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                backend: "unhealthy",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    struct FixedProbe(Result<(), String>);

    #[async_trait]
    impl BackendProbe for FixedProbe {
        async fn ping(&self) -> Result<(), String> {
            self.0.clone()
        }
    }

    fn probe(result: Result<(), String>) -> web::Data<Arc<dyn BackendProbe>> {
        let probe: Arc<dyn BackendProbe> = Arc::new(FixedProbe(result));
        web::Data::new(probe)
    }

    #[actix_web::test]
    async fn health_needs_no_dependencies() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn ready_when_backend_answers() {
        let app = test::init_service(App::new().app_data(probe(Ok(()))).service(readiness)).await;
        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unavailable_when_backend_is_down() {
        let app = test::init_service(
            App::new()
                .app_data(probe(Err("connection refused".to_string())))
                .service(readiness),
        )
        .await;
        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["backend"], "unhealthy");
    }
}
