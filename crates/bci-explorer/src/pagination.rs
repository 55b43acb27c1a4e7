//! Page descriptors and fetch-plan construction for address history.
//!
//! The address endpoint returns at most [`MAX_TRANSACTIONS_PER_PAGE`]
//! transactions per call. Histories longer than one page are assembled from
//! multiple slices; the descriptors built here drive those fetches.

use crate::error::ExplorerError;

/// Largest number of transactions the server returns per address request.
pub const MAX_TRANSACTIONS_PER_PAGE: u32 = 50;

/// One bounded slice of an address's transaction history.
///
/// `new` is the single place the slice bounds are validated; a descriptor
/// that exists is always safe to hand to the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionPage {
    limit: u32,
    offset: u32,
}

impl TransactionPage {
    /// Create a page descriptor.
    ///
    /// Fails with [`ExplorerError::InvalidArgument`] when `limit` is
    /// outside `1..=50`.
    pub fn new(limit: u32, offset: u32) -> Result<Self, ExplorerError> {
        if limit < 1 || limit > MAX_TRANSACTIONS_PER_PAGE {
            return Err(ExplorerError::InvalidArgument(format!(
                "transaction limit must be between 1 and {MAX_TRANSACTIONS_PER_PAGE}, got {limit}"
            )));
        }
        Ok(TransactionPage { limit, offset })
    }

    /// Number of transactions this page requests.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Starting index of this page within the address history.
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

/// Build the descriptors for every page beyond the summary page needed to
/// cover `cap` transactions.
///
/// Full pages of [`MAX_TRANSACTIONS_PER_PAGE`] are placed at offsets 50,
/// 100, … while a whole page still fits under the cap; a trailing partial
/// page picks up the remainder. A cap of 50 or less needs no extra pages.
pub(crate) fn build_fetch_plan(cap: u32) -> Result<Vec<TransactionPage>, ExplorerError> {
    let mut pages = Vec::new();

    let mut offset = MAX_TRANSACTIONS_PER_PAGE;
    while offset + MAX_TRANSACTIONS_PER_PAGE <= cap {
        pages.push(TransactionPage::new(MAX_TRANSACTIONS_PER_PAGE, offset)?);
        offset += MAX_TRANSACTIONS_PER_PAGE;
    }

    let remainder = cap.saturating_sub(offset);
    if remainder > 0 {
        pages.push(TransactionPage::new(remainder, offset)?);
    }

    Ok(pages)
}
