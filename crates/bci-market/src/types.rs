//! Market data types: ticker entries and the network statistics snapshot.

use serde::{Deserialize, Serialize};

use bci_explorer::BitcoinValue;

/// One fiat currency entry from the exchange-rate ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    /// Current buy price.
    #[serde(default)]
    pub buy: f64,
    /// Current sell price.
    #[serde(default)]
    pub sell: f64,
    /// Most recent market price.
    #[serde(default)]
    pub last: f64,
    /// Market price delayed by 15 minutes.
    #[serde(rename = "15m", default)]
    pub price_15m: f64,
    /// Currency symbol.
    #[serde(default)]
    pub symbol: String,
}

/// Network statistics snapshot, compiled daily by the explorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainStats {
    /// Trade volume in the past 24 hours, in BTC.
    #[serde(rename = "trade_volume_btc", default)]
    pub trade_volume_btc: f64,
    /// Trade volume in the past 24 hours, in USD.
    #[serde(rename = "trade_volume_usd", default)]
    pub trade_volume_usd: f64,
    /// Miners' revenue in BTC.
    #[serde(rename = "miners_revenue_btc", default)]
    pub miners_revenue_btc: f64,
    /// Miners' revenue in USD.
    #[serde(rename = "miners_revenue_usd", default)]
    pub miners_revenue_usd: f64,
    /// Current market price in USD.
    #[serde(rename = "market_price_usd", default)]
    pub market_price_usd: f64,
    /// Estimated transaction volume in the past 24 hours, in USD.
    #[serde(rename = "estimated_transaction_volume_usd", default)]
    pub estimated_transaction_volume_usd: f64,
    /// Total fees collected in the past 24 hours.
    #[serde(rename = "total_fees_btc", default)]
    pub total_fees: BitcoinValue,
    /// Total amount sent in the past 24 hours.
    #[serde(rename = "total_btc_sent", default)]
    pub total_sent: BitcoinValue,
    /// Estimated amount sent in the past 24 hours.
    #[serde(rename = "estimated_btc_sent", default)]
    pub estimated_sent: BitcoinValue,
    /// Amount mined in the past 24 hours.
    #[serde(rename = "n_btc_mined", default)]
    pub mined: BitcoinValue,
    /// Current difficulty.
    #[serde(default)]
    pub difficulty: f64,
    /// Average minutes between blocks.
    #[serde(rename = "minutes_between_blocks", default)]
    pub minutes_between_blocks: f64,
    /// Number of transactions in the past 24 hours.
    #[serde(rename = "n_tx", default)]
    pub transaction_count: u64,
    /// Current hash rate in GH/s.
    #[serde(rename = "hash_rate", default)]
    pub hash_rate: f64,
    /// When this snapshot was compiled (unix milliseconds).
    #[serde(default)]
    pub timestamp: u64,
    /// Number of blocks mined in the past 24 hours.
    #[serde(rename = "n_blocks_mined", default)]
    pub mined_blocks: u64,
    /// Combined size of recent blocks in bytes.
    #[serde(rename = "blocks_size", default)]
    pub blocks_size: u64,
    /// Total coins in existence.
    #[serde(rename = "totalbc", default)]
    pub total_coins: BitcoinValue,
    /// Total number of blocks in existence.
    #[serde(rename = "n_blocks_total", default)]
    pub total_blocks: u64,
    /// Block height of the next difficulty retarget.
    #[serde(rename = "nextretarget", default)]
    pub next_retarget: u64,
}
