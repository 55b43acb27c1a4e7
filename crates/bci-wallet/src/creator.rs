//! Wallet creation endpoint.

use bci_http::BlockchainHttpClient;

use crate::error::WalletError;
use crate::types::CreateWalletResponse;

/// Client for creating new hosted wallets.
///
/// Requires the configured API code to carry the "generate wallet"
/// permission; the server rejects the request otherwise.
#[derive(Debug, Clone)]
pub struct WalletCreator {
    http: BlockchainHttpClient,
}

impl WalletCreator {
    /// Create a new wallet-creation client over the given transport.
    pub fn new(http: BlockchainHttpClient) -> Self {
        Self { http }
    }

    /// Create a new wallet.
    ///
    /// A pre-generated private key may be supplied; the server generates
    /// one otherwise. `label` names the wallet's first address and `email`
    /// is associated with the new wallet.
    pub async fn create(
        &self,
        password: &str,
        private_key: Option<&str>,
        label: Option<&str>,
        email: Option<&str>,
    ) -> Result<CreateWalletResponse, WalletError> {
        if password.trim().is_empty() {
            return Err(WalletError::InvalidArgument(
                "wallet password must not be blank".to_string(),
            ));
        }

        let mut params = vec![("password", password.to_string())];
        if let Some(private_key) = private_key {
            params.push(("priv", private_key.to_string()));
        }
        if let Some(label) = label {
            params.push(("label", label.to_string()));
        }
        if let Some(email) = email {
            params.push(("email", email.to_string()));
        }

        Ok(self.http.post_form("api/v2/create_wallet", &params).await?)
    }
}
