//! Wallet data types: responses and the per-wallet address model.

use serde::{Deserialize, Serialize};

use bci_explorer::BitcoinValue;

/// Response to a wallet creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWalletResponse {
    /// Wallet identifier (GUID).
    #[serde(rename = "guid", default)]
    pub identifier: String,
    /// First address in the wallet.
    #[serde(default)]
    pub address: String,
    /// Link to the wallet.
    #[serde(default)]
    pub link: String,
}

/// Response to a payment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Response message from the server.
    #[serde(default)]
    pub message: String,
    /// Hash of the created transaction.
    #[serde(rename = "tx_hash", default)]
    pub tx_hash: String,
    /// Additional notice from the server, when present.
    #[serde(default)]
    pub notice: Option<String>,
}

/// Response to a payment-forwarding setup request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveResponse {
    /// Forwarding fee percentage.
    #[serde(rename = "fee_percent", default)]
    pub fee_percent: u32,
    /// Destination address payments are forwarded to.
    #[serde(rename = "destination", default)]
    pub destination_address: String,
    /// Generated input address for the payer.
    #[serde(rename = "input_address", default)]
    pub input_address: String,
    /// Callback URL invoked on payment.
    #[serde(rename = "callback_url", default)]
    pub callback_url: String,
}

/// An address belonging to a hosted wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletAddress {
    /// Current balance.
    #[serde(default)]
    pub balance: BitcoinValue,
    /// String representation of the address.
    #[serde(rename = "address", default)]
    pub address: String,
    /// Label attached to the address.
    #[serde(default)]
    pub label: Option<String>,
    /// Total amount received by the address.
    #[serde(rename = "total_received", default)]
    pub total_received: BitcoinValue,
}
