//! Hosted wallet handle: payments, balances, and address management.

use std::collections::HashMap;

use bci_http::BlockchainHttpClient;
use serde::{Deserialize, Serialize};

use bci_explorer::BitcoinValue;

use crate::error::WalletError;
use crate::types::{PaymentResponse, WalletAddress};

#[derive(Debug, Serialize)]
struct SinglePaymentRequest {
    #[serde(rename = "main_password")]
    password: String,
    #[serde(rename = "second_password", skip_serializing_if = "Option::is_none")]
    second_password: Option<String>,
    to: String,
    /// Amount in satoshis.
    amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
struct ManyPaymentRequest {
    #[serde(rename = "main_password")]
    password: String,
    #[serde(rename = "second_password", skip_serializing_if = "Option::is_none")]
    second_password: Option<String>,
    /// Recipient address to satoshi amount.
    recipients: HashMap<String, i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BalanceResponse {
    #[serde(default)]
    balance: BitcoinValue,
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    #[serde(default)]
    archived: String,
}

#[derive(Debug, Deserialize)]
struct UnarchiveResponse {
    #[serde(default)]
    active: String,
}

#[derive(Debug, Deserialize)]
struct ConsolidateResponse {
    #[serde(default)]
    consolidated: Vec<String>,
}

/// Handle to a hosted wallet, bound to its identifier and passwords.
///
/// Obtained from
/// [`BlockchainApi::wallet`](../bci_sdk/struct.BlockchainApi.html#method.wallet)
/// or constructed directly over a transport.
#[derive(Debug, Clone)]
pub struct Wallet {
    http: BlockchainHttpClient,
    identifier: String,
    password: String,
    second_password: Option<String>,
}

impl Wallet {
    /// Create a handle for the wallet with the given identifier and
    /// decryption password(s).
    pub fn new(
        http: BlockchainHttpClient,
        identifier: impl Into<String>,
        password: impl Into<String>,
        second_password: Option<String>,
    ) -> Self {
        Self {
            http,
            identifier: identifier.into(),
            password: password.into(),
            second_password,
        }
    }

    /// Send bitcoin to a single address.
    ///
    /// `fee`, `from`, and `note` are optional; the server applies its
    /// default fee when none is given.
    pub async fn send(
        &self,
        to_address: &str,
        amount: BitcoinValue,
        from_address: Option<&str>,
        fee: Option<BitcoinValue>,
        note: Option<&str>,
    ) -> Result<PaymentResponse, WalletError> {
        if to_address.trim().is_empty() {
            return Err(WalletError::InvalidArgument(
                "recipient address must not be blank".to_string(),
            ));
        }
        if amount.satoshis() <= 0 {
            return Err(WalletError::InvalidArgument(
                "amount sent must be greater than 0".to_string(),
            ));
        }

        let request = SinglePaymentRequest {
            password: self.password.clone(),
            second_password: self.second_password.clone(),
            to: to_address.to_string(),
            amount: amount.satoshis(),
            from: from_address.map(str::to_string),
            fee: fee.map(|f| f.satoshis()),
            note: note.map(str::to_string),
        };

        let route = format!("merchant/{}/payment", self.identifier);
        Ok(self.http.post_json(&route, &request).await?)
    }

    /// Send bitcoin to multiple addresses in one transaction.
    pub async fn send_many(
        &self,
        recipients: &HashMap<String, BitcoinValue>,
        from_address: Option<&str>,
        fee: Option<BitcoinValue>,
        note: Option<&str>,
    ) -> Result<PaymentResponse, WalletError> {
        if recipients.is_empty() {
            return Err(WalletError::InvalidArgument(
                "sending requires at least one recipient".to_string(),
            ));
        }

        let request = ManyPaymentRequest {
            password: self.password.clone(),
            second_password: self.second_password.clone(),
            recipients: recipients
                .iter()
                .map(|(address, amount)| (address.clone(), amount.satoshis()))
                .collect(),
            from: from_address.map(str::to_string),
            fee: fee.map(|f| f.satoshis()),
            note: note.map(str::to_string),
        };

        let route = format!("merchant/{}/sendmany", self.identifier);
        Ok(self.http.post_json(&route, &request).await?)
    }

    /// Fetch the wallet balance, including unconfirmed transactions.
    pub async fn get_balance(&self) -> Result<BitcoinValue, WalletError> {
        let route = format!("merchant/{}/balance", self.identifier);
        let response: BalanceResponse = self.http.get(&route, &self.base_query()).await?;
        Ok(response.balance)
    }

    /// List all active addresses in the wallet.
    ///
    /// `confirmations` is the minimum number of confirmations transactions
    /// need before counting towards address balances (0 is allowed).
    pub async fn list_addresses(
        &self,
        confirmations: u32,
    ) -> Result<Vec<WalletAddress>, WalletError> {
        let mut query = self.base_query();
        query.push(("confirmations", confirmations.to_string()));

        let route = format!("merchant/{}/list", self.identifier);
        Ok(self.http.get(&route, &query).await?)
    }

    /// Look up a single address in the wallet.
    pub async fn get_address(
        &self,
        address: &str,
        confirmations: u32,
    ) -> Result<WalletAddress, WalletError> {
        let address = self.non_blank_address(address)?;
        let mut query = self.base_query();
        query.push(("confirmations", confirmations.to_string()));
        query.push(("address", address.to_string()));

        let route = format!("merchant/{}/address_balance", self.identifier);
        Ok(self.http.get(&route, &query).await?)
    }

    /// Generate a new address and add it to the wallet.
    pub async fn new_address(&self, label: Option<&str>) -> Result<WalletAddress, WalletError> {
        let mut query = self.base_query();
        if let Some(label) = label {
            query.push(("label", label.to_string()));
        }

        let route = format!("merchant/{}/new_address", self.identifier);
        Ok(self.http.get(&route, &query).await?)
    }

    /// Archive an address, returning its string representation.
    pub async fn archive_address(&self, address: &str) -> Result<String, WalletError> {
        let address = self.non_blank_address(address)?;
        let mut query = self.base_query();
        query.push(("address", address.to_string()));

        let route = format!("merchant/{}/archive_address", self.identifier);
        let response: ArchiveResponse = self.http.get(&route, &query).await?;
        Ok(response.archived)
    }

    /// Unarchive an address, returning its string representation.
    pub async fn unarchive_address(&self, address: &str) -> Result<String, WalletError> {
        let address = self.non_blank_address(address)?;
        let mut query = self.base_query();
        query.push(("address", address.to_string()));

        let route = format!("merchant/{}/unarchive_address", self.identifier);
        let response: UnarchiveResponse = self.http.get(&route, &query).await?;
        Ok(response.active)
    }

    /// Consolidate addresses that have not received any transactions in at
    /// least `days` days, returning the consolidated addresses.
    pub async fn consolidate(&self, days: u32) -> Result<Vec<String>, WalletError> {
        let mut query = self.base_query();
        query.push(("days", days.to_string()));

        let route = format!("merchant/{}/auto_consolidate", self.identifier);
        let response: ConsolidateResponse = self.http.get(&route, &query).await?;
        Ok(response.consolidated)
    }

    fn base_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("password", self.password.clone())];
        if let Some(ref second) = self.second_password {
            query.push(("second_password", second.clone()));
        }
        query
    }

    fn non_blank_address<'a>(&self, address: &'a str) -> Result<&'a str, WalletError> {
        if address.trim().is_empty() {
            return Err(WalletError::InvalidArgument(
                "address must not be blank".to_string(),
            ));
        }
        Ok(address)
    }
}
