//! Transport configuration.

use std::time::Duration;

/// Configuration for a [`BlockchainHttpClient`](crate::BlockchainHttpClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the API (e.g. `https://blockchain.info`).
    pub base_url: String,
    /// Optional API code appended to every request as the `api_code`
    /// query parameter.
    pub api_code: Option<String>,
    /// Client-side timeout applied to each request.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://blockchain.info".to_string(),
            api_code: None,
            timeout: Duration::from_secs(10),
        }
    }
}
