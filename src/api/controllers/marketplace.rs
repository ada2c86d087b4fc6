//! Marketplace relay controllers.
//!
//! Each endpoint is a straight-line sequence of at most two relayed GET
//! calls. Translation is uniform: a connection failure surfaces as 500 with
//! the attempted URL in the message, an upstream 200 is relayed verbatim, and
//! any other upstream status is mirrored with a fixed per-endpoint message.

use actix_web::HttpResponse;

use crate::models::{ApiError, AppState, MarketerRecord};

/// Relative path of the marketer listing on the marketplace app.
const MARKETERS_URI: &str = "marketers";

/// Relative path of the blog listing on a marketer's own base URL.
const MARKETER_BLOGS_URI: &str = "marketplace/blogs";

/// Retrieves the list of marketers from the marketplace app.
pub async fn list_marketers(state: &AppState) -> Result<HttpResponse, ApiError> {
    let outcome = state
        .marketplace
        .relay_get(&state.marketplace_app_url, MARKETERS_URI)
        .await?;

    if outcome.status != 200 {
        return Err(ApiError::UpstreamStatus {
            status: outcome.status,
            message: "Unable to get marketers.".to_string(),
        });
    }

    Ok(HttpResponse::Ok().json(outcome.body))
}

/// Retrieves the blogs a marketer offers in the marketplace.
///
/// Two sequential stages: resolve the marketer by ID against the marketplace
/// app, then query the blog listing against the marketer's own base URL. The
/// second stage only runs when the first returned 200 with a usable `url`.
pub async fn marketer_blogs(
    marketer_id: String,
    state: &AppState,
) -> Result<HttpResponse, ApiError> {
    let uri = format!("{}/{}", MARKETERS_URI, marketer_id);
    let marketer = state
        .marketplace
        .relay_get(&state.marketplace_app_url, &uri)
        .await?;

    if marketer.status != 200 {
        return Err(ApiError::UpstreamStatus {
            status: marketer.status,
            message: "Unable to get marketer.".to_string(),
        });
    }

    let record: MarketerRecord = serde_json::from_value(marketer.body).map_err(|_| {
        ApiError::BadUpstream(format!(
            "Marketer \"{}\" record has no usable \"url\" field.",
            marketer_id
        ))
    })?;

    let blogs = state
        .marketplace
        .relay_get(&record.url, MARKETER_BLOGS_URI)
        .await?;

    if blogs.status != 200 {
        return Err(ApiError::UpstreamStatus {
            status: blogs.status,
            message: "Unable to get blogs of marketers.".to_string(),
        });
    }

    Ok(HttpResponse::Ok().json(blogs.body))
}
