//! This module defines the HTTP routes for the relayed marketplace endpoints.
//!
//! Both routes live under the `/api/marketplace` scope, which is wrapped by
//! the authorization middleware: unauthorized requests are terminated with
//! 401 before any outbound call is made.
use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{
    api::{controllers::marketplace, middleware::AuthMiddleware},
    models::{ApiError, AppState},
    utils::Authorizer,
};

/// Lists the marketers known to the marketplace app.
#[utoipa::path(
    get,
    path = "/api/marketplace/marketers",
    tag = "Marketplace",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Marketer list relayed from the marketplace app"),
        (status = 401, description = "Unauthorized", body = String),
        (status = 500, description = "Marketplace app unreachable", body = String),
    )
)]
#[get("/marketers")]
pub async fn list_marketers(data: web::ThinData<AppState>) -> Result<HttpResponse, ApiError> {
    marketplace::list_marketers(&data).await
}

/// Lists the blogs a marketer offers in the marketplace.
#[utoipa::path(
    get,
    path = "/api/marketplace/marketers/{marketer_id}/blogs",
    tag = "Marketplace",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("marketer_id" = String, Path, description = "ID of the marketer to query"),
    ),
    responses(
        (status = 200, description = "Blog list relayed from the marketer"),
        (status = 401, description = "Unauthorized", body = String),
        (status = 500, description = "Upstream unreachable", body = String),
        (status = 502, description = "Marketer record unusable", body = String),
    )
)]
#[get("/marketers/{marketer_id}/blogs")]
pub async fn marketer_blogs(
    marketer_id: web::Path<String>,
    data: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    marketplace::marketer_blogs(marketer_id.into_inner(), &data).await
}

pub fn init(cfg: &mut web::ServiceConfig, authorizer: Arc<dyn Authorizer>) {
    cfg.service(
        web::scope("/api/marketplace")
            .wrap(AuthMiddleware::new(authorizer))
            .service(list_marketers)
            .service(marketer_blogs),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MarketplaceService;
    use crate::utils::TokenAuthorizer;
    use actix_web::{body::to_bytes, http::StatusCode, test, App};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-key";

    fn test_components(marketplace_app_url: String) -> (AppState, Arc<dyn Authorizer>) {
        let state = AppState {
            marketplace: Arc::new(MarketplaceService::new().unwrap()),
            marketplace_app_url,
        };
        let authorizer: Arc<dyn Authorizer> = Arc::new(TokenAuthorizer::new(API_KEY));
        (state, authorizer)
    }

    macro_rules! spawn_app {
        ($url:expr) => {{
            let (state, authorizer) = test_components($url);
            test::init_service(
                App::new()
                    .app_data(web::ThinData(state))
                    .configure(move |cfg| init(cfg, authorizer)),
            )
            .await
        }};
    }

    fn authorized(req: test::TestRequest) -> test::TestRequest {
        req.insert_header(("Authorization", format!("Bearer {}", API_KEY)))
    }

    #[actix_web::test]
    async fn test_list_marketers_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/marketers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .expect(1)
            .mount(&server)
            .await;

        let app = spawn_app!(server.uri());
        let req = authorized(test::TestRequest::get().uri("/api/marketplace/marketers"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let relayed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(relayed, json!([{"id": 1}]));
    }

    #[actix_web::test]
    async fn test_unauthenticated_request_makes_no_outbound_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/marketers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let app = spawn_app!(server.uri());
        let req = test::TestRequest::get()
            .uri("/api/marketplace/marketers")
            .to_request();
        let result = test::try_call_service(&app, req).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_upstream_error_status_is_mirrored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/marketers"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "down"})))
            .mount(&server)
            .await;

        let app = spawn_app!(server.uri());
        let req = authorized(test::TestRequest::get().uri("/api/marketplace/marketers"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "\"Unable to get marketers.\"");
    }

    #[actix_web::test]
    async fn test_unreachable_upstream_returns_500_with_url() {
        // Nothing listens on port 9, the connection is refused immediately.
        let app = spawn_app!("http://127.0.0.1:9".to_string());
        let req = authorized(test::TestRequest::get().uri("/api/marketplace/marketers"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let message = String::from_utf8(body.to_vec()).unwrap();
        assert!(message.contains("http://127.0.0.1:9/marketers"));
    }

    #[actix_web::test]
    async fn test_marketer_blogs_end_to_end() {
        let marketer_server = MockServer::start().await;
        let marketplace_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/marketers/42"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"url": marketer_server.uri()})),
            )
            .expect(1)
            .mount(&marketplace_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/marketplace/blogs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "A"}])))
            .expect(1)
            .mount(&marketer_server)
            .await;

        let app = spawn_app!(marketplace_server.uri());
        let req = authorized(test::TestRequest::get().uri("/api/marketplace/marketers/42/blogs"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let relayed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(relayed, json!([{"title": "A"}]));
    }

    #[actix_web::test]
    async fn test_marketer_blogs_stage_one_failure_stops_the_flow() {
        let marketplace_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/marketers/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "missing"})))
            .expect(1)
            .mount(&marketplace_server)
            .await;

        let app = spawn_app!(marketplace_server.uri());
        let req = authorized(test::TestRequest::get().uri("/api/marketplace/marketers/42/blogs"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "\"Unable to get marketer.\"");
    }

    #[actix_web::test]
    async fn test_marketer_blogs_record_without_url_is_502() {
        let marketplace_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/marketers/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
            .expect(1)
            .mount(&marketplace_server)
            .await;

        let app = spawn_app!(marketplace_server.uri());
        let req = authorized(test::TestRequest::get().uri("/api/marketplace/marketers/42/blogs"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
