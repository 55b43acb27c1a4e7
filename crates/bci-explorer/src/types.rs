//! Block explorer data types: addresses, transactions, blocks, unspent
//! outputs, and inventory data.
//!
//! All types are plain mappings of the server's JSON responses. Every value
//! is created fresh per API call and read-only thereafter; there is no
//! caching or cross-call identity.

use serde::{Deserialize, Serialize};

use crate::value::BitcoinValue;

/// An address with aggregate statistics and its transaction history.
///
/// Produced by [`BlockExplorer::get_address`](crate::BlockExplorer::get_address),
/// which merges one summary fetch (counters plus first page) with zero or
/// more page fetches. `transactions` holds up to
/// min(requested max, `transaction_count`) entries in the server's
/// most-recent-first order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Hash160 representation of the address.
    #[serde(default)]
    pub hash160: String,
    /// Base58check representation of the address.
    #[serde(rename = "address", default)]
    pub base58: String,
    /// Total amount received.
    #[serde(rename = "total_received", default)]
    pub total_received: BitcoinValue,
    /// Total amount sent.
    #[serde(rename = "total_sent", default)]
    pub total_sent: BitcoinValue,
    /// Final balance of the address.
    #[serde(rename = "final_balance", default)]
    pub final_balance: BitcoinValue,
    /// Total count of all transactions of this address.
    #[serde(rename = "n_tx", default)]
    pub transaction_count: u32,
    /// Transactions associated with this address, most recent first.
    #[serde(rename = "txs", default)]
    pub transactions: Vec<Transaction>,
}

/// A transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction hash.
    #[serde(default)]
    pub hash: String,
    /// Transaction index.
    #[serde(rename = "tx_index", default)]
    pub index: u64,
    /// Transaction format version.
    #[serde(rename = "ver", default)]
    pub version: i32,
    /// Serialized size of the transaction in bytes.
    #[serde(default)]
    pub size: u64,
    /// Timestamp of the transaction (unix seconds).
    #[serde(default)]
    pub time: u64,
    /// Height of the containing block. `None` for unconfirmed transactions.
    #[serde(rename = "block_height", default)]
    pub block_height: Option<u64>,
    /// Whether the transaction is a double spend.
    #[serde(default)]
    pub double_spend: bool,
    /// IP address that relayed the transaction.
    #[serde(rename = "relayed_by", default)]
    pub relayed_by: Option<String>,
    /// Transaction inputs, in order.
    #[serde(default)]
    pub inputs: Vec<TransactionInput>,
    /// Transaction outputs, in order.
    #[serde(rename = "out", default)]
    pub outputs: Vec<TransactionOutput>,
}

impl Transaction {
    /// Whether this transaction has been included in a block.
    pub fn is_confirmed(&self) -> bool {
        self.block_height.is_some()
    }
}

/// A transaction input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    /// The output being spent. `None` for a coinbase (generation) input.
    #[serde(rename = "prev_out", default)]
    pub previous_output: Option<TransactionOutput>,
    /// Sequence number of the input.
    #[serde(default)]
    pub sequence: u64,
    /// Script signature.
    #[serde(rename = "script", default)]
    pub script_signature: String,
}

impl TransactionInput {
    /// Whether this input mints new coins rather than spending an output.
    pub fn is_coinbase(&self) -> bool {
        self.previous_output.is_none()
    }
}

/// A transaction output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Index of the output within its transaction.
    #[serde(default)]
    pub n: u32,
    /// Value of the output.
    #[serde(default)]
    pub value: BitcoinValue,
    /// Address the output belongs to.
    #[serde(rename = "addr", default)]
    pub address: Option<String>,
    /// Index of the containing transaction.
    #[serde(rename = "tx_index", default)]
    pub tx_index: u64,
    /// Output script.
    #[serde(default)]
    pub script: String,
    /// Whether the output has been spent.
    #[serde(default)]
    pub spent: bool,
}

/// Simple representation of a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleBlock {
    /// Block height.
    #[serde(default)]
    pub height: u64,
    /// Block hash.
    #[serde(default)]
    pub hash: String,
    /// Block timestamp set by the miner (unix seconds).
    #[serde(default)]
    pub time: u64,
    /// Whether the block is on the main chain.
    #[serde(rename = "main_chain", default)]
    pub main_chain: bool,
}

/// Full representation of a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Block height.
    #[serde(default)]
    pub height: u64,
    /// Block hash.
    #[serde(default)]
    pub hash: String,
    /// Block timestamp set by the miner (unix seconds).
    #[serde(default)]
    pub time: u64,
    /// Whether the block is on the main chain.
    #[serde(rename = "main_chain", default)]
    pub main_chain: bool,
    /// Block version as specified by the protocol.
    #[serde(rename = "ver", default)]
    pub version: i32,
    /// Hash of the previous block.
    #[serde(rename = "prev_block", default)]
    pub previous_block_hash: String,
    /// Merkle root of the block.
    #[serde(rename = "mrkl_root", default)]
    pub merkle_root: String,
    /// Representation of the difficulty target for this block.
    #[serde(default)]
    pub bits: u64,
    /// Total transaction fees collected in this block.
    #[serde(rename = "fee", default)]
    pub fees: BitcoinValue,
    /// Block nonce.
    #[serde(default)]
    pub nonce: u64,
    /// Serialized size of this block in bytes.
    #[serde(default)]
    pub size: u64,
    /// Index of this block.
    #[serde(rename = "block_index", default)]
    pub index: u64,
    /// The time the explorer received this block (unix seconds), when it
    /// differs from the miner timestamp.
    #[serde(rename = "received_time", default)]
    received_time: Option<u64>,
    /// IP address that relayed the block.
    #[serde(rename = "relayed_by", default)]
    pub relayed_by: Option<String>,
    /// Transactions in the block.
    #[serde(rename = "tx", default)]
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// The time the explorer received this block, falling back to the miner
    /// timestamp when no separate received time was reported.
    pub fn received_time(&self) -> u64 {
        self.received_time.unwrap_or(self.time)
    }
}

/// The latest block on the main chain, in simplified form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestBlock {
    /// Block height.
    #[serde(default)]
    pub height: u64,
    /// Block hash.
    #[serde(default)]
    pub hash: String,
    /// Block timestamp set by the miner (unix seconds).
    #[serde(default)]
    pub time: u64,
    /// Index of this block.
    #[serde(rename = "block_index", default)]
    pub index: u64,
    /// Indexes of the transactions included in this block.
    #[serde(rename = "txIndexes", default)]
    pub transaction_indexes: Vec<u64>,
}

/// An unspent transaction output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnspentOutput {
    /// Index of the output within its transaction.
    #[serde(rename = "tx_output_n", default)]
    pub n: u32,
    /// Hash of the containing transaction.
    #[serde(rename = "tx_hash", default)]
    pub transaction_hash: String,
    /// Index of the containing transaction.
    #[serde(rename = "tx_index", default)]
    pub transaction_index: u64,
    /// Output script.
    #[serde(default)]
    pub script: String,
    /// Value of the output.
    #[serde(default)]
    pub value: BitcoinValue,
    /// Number of confirmations.
    #[serde(default)]
    pub confirmations: u64,
}

/// Inventory data the explorer collected for an object hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryData {
    /// Object hash.
    #[serde(default)]
    pub hash: String,
    /// Object type.
    #[serde(rename = "type", default)]
    pub object_type: String,
    /// When the first inventory message for this hash was received
    /// (unix seconds).
    #[serde(rename = "initial_time", default)]
    pub initial_time: u64,
    /// When the last inventory message for this hash was received
    /// (unix seconds).
    #[serde(rename = "last_time", default)]
    pub last_time: u64,
    /// Peer from which the first inventory message was received.
    #[serde(rename = "initial_ip", default)]
    pub initial_ip: String,
    /// Number of currently connected nodes.
    #[serde(rename = "nconnected", default)]
    pub connected_nodes: u32,
    /// Number of nodes an inventory message was received from.
    #[serde(rename = "relayed_count", default)]
    pub relayed_count: u32,
    /// Percentage of connected nodes that relayed this hash.
    #[serde(rename = "relayed_percent", default)]
    pub relayed_percent: u32,
}
