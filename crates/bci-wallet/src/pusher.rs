//! Raw transaction broadcast endpoint.

use bci_http::BlockchainHttpClient;

use crate::error::WalletError;

/// Client for broadcasting hex-encoded transactions to the network.
#[derive(Debug, Clone)]
pub struct TransactionPusher {
    http: BlockchainHttpClient,
}

impl TransactionPusher {
    /// Create a new transaction-push client over the given transport.
    pub fn new(http: BlockchainHttpClient) -> Self {
        Self { http }
    }

    /// Broadcast a hex-encoded transaction.
    ///
    /// The payload must be non-empty hex; the server answers with plain
    /// text, which is discarded on success.
    pub async fn push_transaction(&self, tx_hex: &str) -> Result<(), WalletError> {
        if tx_hex.trim().is_empty() {
            return Err(WalletError::InvalidArgument(
                "transaction hex must not be blank".to_string(),
            ));
        }
        if !tx_hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WalletError::InvalidArgument(
                "transaction payload is not hex encoded".to_string(),
            ));
        }

        let params = [("tx", tx_hex.to_string())];
        self.http.post_form_text("pushtx", &params).await?;
        Ok(())
    }
}
