#![deny(missing_docs)]

//! # bci-wallet
//!
//! Wallet operations against the Blockchain.info API: sending payments from
//! a hosted wallet, creating wallets, setting up payment forwarding, and
//! broadcasting raw transactions.
//!
//! All endpoints here are simple request/response calls; arguments are
//! validated locally before any network traffic.

pub mod creator;
pub mod error;
pub mod pusher;
pub mod receiver;
pub mod types;
pub mod wallet;

#[cfg(test)]
mod tests;

pub use creator::WalletCreator;
pub use error::WalletError;
pub use pusher::TransactionPusher;
pub use receiver::FundReceiver;
pub use types::{CreateWalletResponse, PaymentResponse, ReceiveResponse, WalletAddress};
pub use wallet::Wallet;
