/// Name of the header carrying the caller's credential.
pub const AUTHORIZATION_HEADER_NAME: &str = "Authorization";

/// Expected prefix of the credential header value.
pub const AUTHORIZATION_HEADER_VALUE_PREFIX: &str = "Bearer ";

/// Logical resource name guarding the marketplace routes.
pub const MARKETPLACE_RESOURCE: &str = "marketers";
