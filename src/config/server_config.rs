use std::env;

/// Server configuration, loaded once at startup and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the marketplace app all relayed requests resolve against.
    pub marketplace_app_url: String,
    /// Token accepted by the authorization gate.
    pub api_key: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            marketplace_app_url: env::var("MARKETPLACE_APP_URL")
                .expect("MARKETPLACE_APP_URL must be set"),
            api_key: env::var("API_KEY").expect("API_KEY must be set"),
        }
    }
}
