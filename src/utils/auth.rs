//! Request authorization.
//!
//! Bearer credential extraction from inbound requests, plus the [`Authorizer`]
//! capability the marketplace routes are gated behind.

use actix_web::dev::ServiceRequest;

use crate::constants::{AUTHORIZATION_HEADER_NAME, AUTHORIZATION_HEADER_VALUE_PREFIX};

/// Capability deciding whether a credential may reach a resource.
///
/// An empty `allowed_roles` slice means any authenticated identity is
/// accepted, which is how the marketplace routes call it.
pub trait Authorizer: Send + Sync {
    fn authorize(
        &self,
        credential: Option<&str>,
        resource: &str,
        method: &str,
        allowed_roles: &[String],
    ) -> bool;
}

/// Authorizer backed by the single API key configured at startup.
pub struct TokenAuthorizer {
    api_key: String,
}

impl TokenAuthorizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl Authorizer for TokenAuthorizer {
    fn authorize(
        &self,
        credential: Option<&str>,
        _resource: &str,
        _method: &str,
        _allowed_roles: &[String],
    ) -> bool {
        match credential {
            Some(token) => !token.is_empty() && token == self.api_key,
            None => false,
        }
    }
}

/// Extracts the bearer token from the request, if present and well formed.
///
/// Requires exactly one Authorization header whose value starts with
/// `Bearer `, followed by a non-empty token without spaces.
pub fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    let headers: Vec<_> = req.headers().get_all(AUTHORIZATION_HEADER_NAME).collect();
    if headers.len() != 1 {
        return None;
    }

    let value = headers[0].to_str().ok()?;
    let token = value.strip_prefix(AUTHORIZATION_HEADER_VALUE_PREFIX)?;
    if token.is_empty() || token.contains(' ') {
        return None;
    }

    Some(token)
}
