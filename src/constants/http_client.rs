/// Overall timeout for an upstream marketplace request, in seconds.
/// A request that has not completed by then fails as a connection error.
pub const DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS: u64 = 5;

/// Maximum time to wait for establishing a connection, in seconds.
pub const DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS: u64 = 2;
