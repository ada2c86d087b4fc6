//! # API Routes Module
//!
//! Configures HTTP routes for the relay service.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint, unauthenticated
//! * `/api/marketplace` - Relayed marketplace endpoints, gated by the authorizer

pub mod health;
pub mod marketplace;

use std::sync::Arc;

use actix_web::web;

use crate::utils::Authorizer;

pub fn configure_routes(cfg: &mut web::ServiceConfig, authorizer: Arc<dyn Authorizer>) {
    cfg.configure(health::init);
    marketplace::init(cfg, authorizer);
}
