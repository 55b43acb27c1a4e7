//! Error types for wallet operations.

use bci_http::ApiError;

/// Errors that can occur when performing wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Transport or server failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A caller-supplied argument was rejected before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
