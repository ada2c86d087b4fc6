//! This module provides the health check endpoint for the API.
//!
//! The `/health` endpoint can be used to verify that the service is running
//! and responsive. It is not gated by the authorization middleware.
use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::api::controllers;

/// Handles the `/health` endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = String, example = json!("OK")),
    )
)]
#[get("/health")]
pub async fn health() -> Result<HttpResponse, actix_web::Error> {
    controllers::health::health().await
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_endpoint_is_unauthenticated() {
        let app = test::init_service(App::new().configure(init)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }
}
