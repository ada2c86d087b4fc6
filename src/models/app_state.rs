use std::sync::Arc;

use crate::services::MarketplaceApiTrait;

/// Shared application state, cloned into each worker and injected into
/// handlers via `web::ThinData`. Built once at startup; nothing in it mutates
/// afterwards.
#[derive(Clone)]
pub struct AppState {
    pub marketplace: Arc<dyn MarketplaceApiTrait>,
    /// Base URL of the marketplace app, from `MARKETPLACE_APP_URL`.
    pub marketplace_app_url: String,
}
