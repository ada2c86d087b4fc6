use crate::api::routes::{health, marketplace};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    tags((name = "Marketplace Relay API")),
    info(
        description = "Thin relay in front of the marketplace app",
        version = "0.1.0",
        title = "Marketplace Relay API"
    ),
    paths(
        marketplace::list_marketers,
        marketplace::marketer_blogs,
        health::health,
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_both_marketplace_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/marketplace/marketers"));
        assert!(paths.contains_key("/api/marketplace/marketers/{marketer_id}/blogs"));
        assert!(paths.contains_key("/health"));
    }
}
