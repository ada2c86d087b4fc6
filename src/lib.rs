//! # Marketplace Relay
//!
//! Thin HTTP relay in front of the marketplace app: two authenticated GET
//! endpoints forward requests upstream and republish the JSON response (or a
//! translated error) to the caller.
//!
//! ## Structure
//!
//! * `api` - HTTP routes, controllers and middleware
//! * `services` - outbound request sending against the marketplace app
//! * `config` - server configuration loaded from the environment
//! * `models` - application state, wire records and API errors

pub mod api;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod services;
pub mod utils;

pub use models::{ApiError, AppState};
