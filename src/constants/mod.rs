pub mod auth;
pub mod http_client;

pub use auth::*;
pub use http_client::*;
