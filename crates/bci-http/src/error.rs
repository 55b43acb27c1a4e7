//! Error types for API transport operations.

/// Errors that can occur when talking to the Blockchain.info API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (connection, TLS, or timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a response body.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned a non-2xx response.
    #[error("server error ({status_code}): {message}")]
    Server {
        /// HTTP status code.
        status_code: u16,
        /// Error message from the response body.
        message: String,
    },
}
