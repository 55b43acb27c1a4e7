#![deny(missing_docs)]

//! # bci-market
//!
//! Market data from the Blockchain.info API: the fiat exchange-rate ticker,
//! currency-to-BTC conversion, and the daily network statistics snapshot.

pub mod client;
pub mod error;
pub mod types;


pub use client::{ExchangeRateClient, StatisticsClient};
pub use error::MarketError;
pub use types::{ChainStats, Currency};
