#![deny(missing_docs)]

//! Blockchain.info API SDK - Complete SDK.
//!
//! Re-exports all SDK components for convenient single-crate usage and
//! provides [`BlockchainApi`], which wires every service over one shared
//! HTTP transport.
//!
//! # Example
//!
//! ```no_run
//! use bci_sdk::{ApiConfig, BlockchainApi};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = BlockchainApi::new(ApiConfig::default());
//!
//! let address = api
//!     .block_explorer
//!     .get_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", Some(100))
//!     .await?;
//! println!("balance: {}", address.final_balance);
//!
//! let ticker = api.exchange_rates.get_ticker().await?;
//! println!("USD: {}", ticker["USD"].last);
//! # Ok(())
//! # }
//! ```

pub use bci_explorer as explorer;
pub use bci_http as http;
pub use bci_market as market;
pub use bci_wallet as wallet;

pub use bci_explorer::{BitcoinValue, BlockExplorer};
pub use bci_http::{ApiConfig, BlockchainHttpClient};
pub use bci_market::{ExchangeRateClient, StatisticsClient};
pub use bci_wallet::{FundReceiver, TransactionPusher, Wallet, WalletCreator};

/// Entry point bundling every API service over one shared transport.
///
/// The underlying HTTP client (connection pool, API code, timeout) is
/// shared read-only configuration; each service holds a cheap clone of it.
#[derive(Debug, Clone)]
pub struct BlockchainApi {
    /// Block, transaction, and address lookups.
    pub block_explorer: BlockExplorer,
    /// Exchange-rate ticker and conversion.
    pub exchange_rates: ExchangeRateClient,
    /// Network statistics snapshot.
    pub statistics: StatisticsClient,
    /// Wallet creation.
    pub wallet_creator: WalletCreator,
    /// Payment forwarding.
    pub fund_receiver: FundReceiver,
    /// Raw transaction broadcast.
    pub transaction_pusher: TransactionPusher,
    http: BlockchainHttpClient,
}

impl BlockchainApi {
    /// Create every service from the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        let http = BlockchainHttpClient::new(config);
        Self {
            block_explorer: BlockExplorer::new(http.clone()),
            exchange_rates: ExchangeRateClient::new(http.clone()),
            statistics: StatisticsClient::new(http.clone()),
            wallet_creator: WalletCreator::new(http.clone()),
            fund_receiver: FundReceiver::new(http.clone()),
            transaction_pusher: TransactionPusher::new(http.clone()),
            http,
        }
    }

    /// Create a handle to a hosted wallet, sharing this API's transport.
    pub fn wallet(
        &self,
        identifier: impl Into<String>,
        password: impl Into<String>,
        second_password: Option<String>,
    ) -> Wallet {
        Wallet::new(self.http.clone(), identifier, password, second_password)
    }
}

impl Default for BlockchainApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}
