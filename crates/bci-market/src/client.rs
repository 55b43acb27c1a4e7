//! Clients for the exchange-rate and statistics endpoints.

use std::collections::HashMap;

use bci_http::BlockchainHttpClient;

use crate::error::MarketError;
use crate::types::{ChainStats, Currency};

/// Client for the exchange-rate ticker and conversion endpoints.
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    http: BlockchainHttpClient,
}

impl ExchangeRateClient {
    /// Create a new exchange-rate client over the given transport.
    pub fn new(http: BlockchainHttpClient) -> Self {
        Self { http }
    }

    /// Get the price ticker, keyed by 3-letter currency symbol.
    pub async fn get_ticker(&self) -> Result<HashMap<String, Currency>, MarketError> {
        Ok(self.http.get("ticker", &[]).await?)
    }

    /// Convert `value` in the given fiat currency to BTC at the current
    /// market rate.
    pub async fn to_btc(&self, currency: &str, value: f64) -> Result<f64, MarketError> {
        if currency.trim().is_empty() {
            return Err(MarketError::InvalidArgument(
                "currency must not be blank".to_string(),
            ));
        }
        if value <= 0.0 {
            return Err(MarketError::InvalidArgument(format!(
                "value must be greater than 0, got {value}"
            )));
        }

        let query = [
            ("currency", currency.to_string()),
            ("value", value.to_string()),
        ];
        Ok(self.http.get("tobtc", &query).await?)
    }
}

/// Client for the network statistics endpoint.
#[derive(Debug, Clone)]
pub struct StatisticsClient {
    http: BlockchainHttpClient,
}

impl StatisticsClient {
    /// Create a new statistics client over the given transport.
    pub fn new(http: BlockchainHttpClient) -> Self {
        Self { http }
    }

    /// Get the current network statistics snapshot.
    pub async fn get_stats(&self) -> Result<ChainStats, MarketError> {
        let query = [("format", "json".to_string())];
        Ok(self.http.get("stats", &query).await?)
    }
}
