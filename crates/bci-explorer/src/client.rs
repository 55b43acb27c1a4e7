//! Block explorer service: single-entity lookups and the paginated
//! address-history aggregation.

use std::time::{SystemTime, UNIX_EPOCH};

use bci_http::{ApiError, BlockchainHttpClient};
use futures::future::join_all;
use tracing::debug;

use crate::error::ExplorerError;
use crate::pagination::{build_fetch_plan, TransactionPage, MAX_TRANSACTIONS_PER_PAGE};
use crate::types::{
    Address, Block, InventoryData, LatestBlock, SimpleBlock, Transaction, UnspentOutput,
};

/// Timestamp of the genesis block (2009-01-03T18:28:25Z). Block queries by
/// date must not predate it.
const GENESIS_BLOCK_TIME: u64 = 1_231_006_505;

/// Client for the block explorer endpoints.
///
/// Queries the chain for block, transaction, and address data, and fetches
/// unspent outputs for an address.
#[derive(Debug, Clone)]
pub struct BlockExplorer {
    http: BlockchainHttpClient,
}

impl BlockExplorer {
    /// Create a new explorer over the given transport.
    pub fn new(http: BlockchainHttpClient) -> Self {
        Self { http }
    }

    /// Get a single transaction by hash or index.
    pub async fn get_transaction(&self, hash_or_index: &str) -> Result<Transaction, ExplorerError> {
        let id = non_blank(hash_or_index, "transaction hash or index")?;
        Ok(self.http.get(&format!("rawtx/{id}"), &[]).await?)
    }

    /// Get a single block by hash or index.
    pub async fn get_block(&self, hash_or_index: &str) -> Result<Block, ExplorerError> {
        let id = non_blank(hash_or_index, "block hash or index")?;
        let mut block: Block = self.http.get(&format!("rawblock/{id}"), &[]).await?;

        // The server omits block_height on the embedded transactions; patch
        // it in from the block header so they match standalone lookups.
        for transaction in &mut block.transactions {
            transaction.block_height = Some(block.height);
        }
        Ok(block)
    }

    /// Get all blocks at the given height. Normally a single block, but a
    /// chain fork can produce several.
    pub async fn get_blocks_at_height(&self, height: u64) -> Result<Vec<Block>, ExplorerError> {
        let query = [("format", "json".to_string())];
        Ok(self
            .http
            .get(&format!("block-height/{height}"), &query)
            .await?)
    }

    /// Get the latest block on the main chain, in simplified form.
    pub async fn get_latest_block(&self) -> Result<LatestBlock, ExplorerError> {
        Ok(self.http.get("latestblock", &[]).await?)
    }

    /// Get the currently unconfirmed transactions.
    pub async fn get_unconfirmed_transactions(&self) -> Result<Vec<Transaction>, ExplorerError> {
        let query = [("format", "json".to_string())];
        Ok(self.http.get("unconfirmed-transactions", &query).await?)
    }

    /// Get the blocks mined on the day containing `unix_seconds`.
    ///
    /// The timestamp must not predate the genesis block or lie in the
    /// future.
    pub async fn get_blocks_by_timestamp(
        &self,
        unix_seconds: u64,
    ) -> Result<Vec<SimpleBlock>, ExplorerError> {
        if unix_seconds < GENESIS_BLOCK_TIME {
            return Err(ExplorerError::InvalidArgument(format!(
                "timestamp {unix_seconds} predates the genesis block"
            )));
        }
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(u64::MAX);
        if unix_seconds > now {
            return Err(ExplorerError::InvalidArgument(format!(
                "timestamp {unix_seconds} is in the future"
            )));
        }

        // The endpoint takes milliseconds.
        self.get_blocks_raw(&(unix_seconds * 1000).to_string()).await
    }

    /// Get the recent blocks mined by the given pool.
    pub async fn get_blocks_by_pool(
        &self,
        pool_name: &str,
    ) -> Result<Vec<SimpleBlock>, ExplorerError> {
        let pool = non_blank(pool_name, "pool name")?;
        self.get_blocks_raw(pool).await
    }

    async fn get_blocks_raw(&self, selector: &str) -> Result<Vec<SimpleBlock>, ExplorerError> {
        let query = [("format", "json".to_string())];
        Ok(self.http.get(&format!("blocks/{selector}"), &query).await?)
    }

    /// Get the unspent outputs for an address.
    ///
    /// The server reports "no spendable outputs" as an error even though it
    /// is a legitimate state; that specific error is normalized to an empty
    /// list. Every other failure propagates.
    pub async fn get_unspent_outputs(
        &self,
        address: &str,
    ) -> Result<Vec<UnspentOutput>, ExplorerError> {
        let address = non_blank(address, "address")?;
        let query = [("active", address.to_string())];
        match self.http.get("unspent", &query).await {
            Ok(outputs) => Ok(outputs),
            Err(ApiError::Server { ref message, .. }) if message.contains("outputs to spend") => {
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get inventory data for an object hash.
    pub async fn get_inventory_data(&self, hash: &str) -> Result<InventoryData, ExplorerError> {
        let hash = non_blank(hash, "object hash")?;
        let query = [("format", "json".to_string())];
        Ok(self.http.get(&format!("inv/{hash}"), &query).await?)
    }

    /// Get an address with up to `max_transaction_count` of its
    /// transactions.
    ///
    /// Issues one summary request for the counters and first page, then
    /// fetches any remaining pages concurrently and merges them in offset
    /// order, so the result is in the server's native most-recent-first
    /// order regardless of network timing. With no max, the full
    /// server-reported history is fetched. If any page fails the whole call
    /// fails; a partial history is never returned.
    pub async fn get_address(
        &self,
        address: &str,
        max_transaction_count: Option<u32>,
    ) -> Result<Address, ExplorerError> {
        let address = non_blank(address, "address")?;

        let summary_page = TransactionPage::new(MAX_TRANSACTIONS_PER_PAGE, 0)?;
        let mut summary = self.fetch_address_page(address, summary_page).await?;

        // A max below one page is already satisfied by the summary fetch.
        if let Some(max) = max_transaction_count {
            if max < MAX_TRANSACTIONS_PER_PAGE {
                summary.transactions.truncate(max as usize);
                return Ok(summary);
            }
        }

        // The cap always comes from the just-fetched summary, never from a
        // count the caller may have cached earlier.
        let cap = match max_transaction_count {
            Some(max) => max.min(summary.transaction_count),
            None => summary.transaction_count,
        };

        let plan = build_fetch_plan(cap)?;
        debug!(address, cap, pages = plan.len(), "fetching address history");

        let fetches = plan
            .iter()
            .map(|page| self.fetch_address_page(address, *page));
        let results = join_all(fetches).await;

        // join_all yields results in input order, which is ascending offset
        // order; a failed page fails the whole aggregation.
        for paged in results {
            summary.transactions.extend(paged?.transactions);
        }

        Ok(summary)
    }

    async fn fetch_address_page(
        &self,
        address: &str,
        page: TransactionPage,
    ) -> Result<Address, ExplorerError> {
        let query = [
            ("offset", page.offset().to_string()),
            ("limit", page.limit().to_string()),
        ];
        Ok(self.http.get(&format!("rawaddr/{address}"), &query).await?)
    }
}

fn non_blank<'a>(value: &'a str, what: &str) -> Result<&'a str, ExplorerError> {
    if value.trim().is_empty() {
        return Err(ExplorerError::InvalidArgument(format!(
            "{what} must not be blank"
        )));
    }
    Ok(value)
}
