//! Error types for market data operations.

use bci_http::ApiError;

/// Errors that can occur when fetching market data.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// Transport or server failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A caller-supplied argument was rejected before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
