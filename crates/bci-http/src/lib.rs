#![deny(missing_docs)]

//! # bci-http
//!
//! HTTP transport for the Blockchain.info API.
//!
//! This crate provides the single capability interface the rest of the SDK
//! is built on: parameterized GET and POST requests against a configured
//! base endpoint, with an optional API code attached to every call and
//! non-success responses translated into a typed [`ApiError`].
//!
//! # Example
//!
//! ```no_run
//! use bci_http::{ApiConfig, BlockchainHttpClient};
//!
//! # async fn example() -> Result<(), bci_http::ApiError> {
//! let client = BlockchainHttpClient::new(ApiConfig {
//!     api_code: Some("my-api-code".to_string()),
//!     ..Default::default()
//! });
//!
//! let latest: serde_json::Value = client.get("latestblock", &[]).await?;
//! println!("latest block: {latest}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::BlockchainHttpClient;
pub use error::ApiError;
pub use types::ApiConfig;
