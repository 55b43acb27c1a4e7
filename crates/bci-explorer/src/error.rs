//! Error types for block explorer operations.

use bci_http::ApiError;

/// Errors that can occur when querying the block explorer.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// Transport or server failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A caller-supplied argument was rejected before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
