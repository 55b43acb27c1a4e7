#![deny(missing_docs)]

//! # bci-explorer
//!
//! Block explorer client for the Blockchain.info API: blocks, transactions,
//! addresses, and unspent outputs as typed values deserialized from the
//! server's JSON.
//!
//! The one non-trivial piece is [`BlockExplorer::get_address`], which
//! assembles an address's full transaction history from a size-limited
//! endpoint: one summary request for the counters and first page, then
//! concurrent requests for the remaining pages, merged back in offset order.
//!
//! # Example
//!
//! ```no_run
//! use bci_explorer::BlockExplorer;
//! use bci_http::{ApiConfig, BlockchainHttpClient};
//!
//! # async fn example() -> Result<(), bci_explorer::ExplorerError> {
//! let http = BlockchainHttpClient::new(ApiConfig::default());
//! let explorer = BlockExplorer::new(http);
//!
//! let address = explorer
//!     .get_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", Some(100))
//!     .await?;
//! println!(
//!     "{} has {} transactions, balance {}",
//!     address.base58,
//!     address.transaction_count,
//!     address.final_balance
//! );
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod pagination;
pub mod types;
pub mod value;


pub use client::BlockExplorer;
pub use error::ExplorerError;
pub use pagination::{TransactionPage, MAX_TRANSACTIONS_PER_PAGE};
pub use types::{
    Address, Block, InventoryData, LatestBlock, SimpleBlock, Transaction, TransactionInput,
    TransactionOutput, UnspentOutput,
};
pub use value::BitcoinValue;
