//! Payment-forwarding (receive) endpoint.

use bci_http::BlockchainHttpClient;

use crate::error::WalletError;
use crate::types::ReceiveResponse;

/// Client for creating forwarding addresses that notify a callback on
/// payment.
#[derive(Debug, Clone)]
pub struct FundReceiver {
    http: BlockchainHttpClient,
}

impl FundReceiver {
    /// Create a new fund-receiving client over the given transport.
    pub fn new(http: BlockchainHttpClient) -> Self {
        Self { http }
    }

    /// Create a forwarding address that sends received funds to
    /// `receiving_address` and calls `callback_url` on payment.
    pub async fn receive(
        &self,
        receiving_address: &str,
        callback_url: &str,
    ) -> Result<ReceiveResponse, WalletError> {
        if receiving_address.trim().is_empty() {
            return Err(WalletError::InvalidArgument(
                "receiving address must not be blank".to_string(),
            ));
        }
        if callback_url.trim().is_empty() {
            return Err(WalletError::InvalidArgument(
                "callback URL must not be blank".to_string(),
            ));
        }

        let params = [
            ("address", receiving_address.to_string()),
            ("callback", callback_url.to_string()),
            ("method", "create".to_string()),
        ];
        Ok(self.http.post_form("api/receive", &params).await?)
    }
}
