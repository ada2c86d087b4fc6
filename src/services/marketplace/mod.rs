//! Marketplace relay service.
//!
//! Sends single GET requests against the marketplace app (or a marketer's own
//! base URL) and returns the decoded JSON body together with the upstream
//! status code. Transport failures are surfaced immediately, never retried.

use std::time::Duration;

use async_trait::async_trait;
use log::info;
#[cfg(test)]
use mockall::automock;
use reqwest::{header::CONTENT_TYPE, Client, Url};
use serde_json::Value;
use thiserror::Error;

use crate::constants::{
    DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS, DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS,
};

#[derive(Error, Debug, PartialEq)]
pub enum MarketplaceServiceError {
    #[error("Unable to connect to api_url \"{url}\".")]
    Connection { url: String },

    #[error("Response from \"{url}\" is not valid JSON")]
    MalformedBody { url: String },

    #[error("Invalid marketplace URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Decoded upstream response: numeric status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaySuccess {
    pub status: u16,
    pub body: Value,
}

/// Trait for sending relayed marketplace requests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarketplaceApiTrait: Send + Sync {
    /// Sends exactly one GET request to `path` resolved against `base_url`.
    ///
    /// Any transport-level failure (DNS, refusal, timeout) maps to
    /// [`MarketplaceServiceError::Connection`] carrying the attempted URL. A
    /// response body that is not valid JSON maps to
    /// [`MarketplaceServiceError::MalformedBody`].
    async fn relay_get(
        &self,
        base_url: &str,
        path: &str,
    ) -> Result<RelaySuccess, MarketplaceServiceError>;
}

/// Joins `path` onto `base_url` with standard URL-joining semantics.
///
/// The base is normalized to end with a trailing slash first, so its last
/// path segment is preserved and joining is idempotent with respect to a
/// trailing slash on the configured URL.
pub fn join_url(base_url: &str, path: &str) -> Result<Url, MarketplaceServiceError> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    let base = Url::parse(&normalized)
        .map_err(|e| MarketplaceServiceError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    base.join(path)
        .map_err(|e| MarketplaceServiceError::InvalidUrl(format!("{}: {}", path, e)))
}

/// Default implementation backed by a shared `reqwest` client.
pub struct MarketplaceService {
    client: Client,
}

impl MarketplaceService {
    pub fn new() -> Result<Self, MarketplaceServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS))
            .connect_timeout(Duration::from_secs(
                DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS,
            ))
            .build()
            .map_err(|e| MarketplaceServiceError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl MarketplaceApiTrait for MarketplaceService {
    async fn relay_get(
        &self,
        base_url: &str,
        path: &str,
    ) -> Result<RelaySuccess, MarketplaceServiceError> {
        let url = join_url(base_url, path)?;

        info!("API GET request to {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|_| MarketplaceServiceError::Connection {
                url: url.to_string(),
            })?;

        let status = response.status().as_u16();
        let body: Value =
            response
                .json()
                .await
                .map_err(|_| MarketplaceServiceError::MalformedBody {
                    url: url.to_string(),
                })?;
        info!("API GET request to {} - response: {} {}", url, status, body);

        Ok(RelaySuccess { status, body })
    }
}
