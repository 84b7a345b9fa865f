use serde::Serialize;
use tracing::instrument;

use crate::{
    types::{Batch, BatchSelector, Bridge, LastItem},
    ChainReader, QueryOptions, ReaderError,
};

/// One page of a listing plus the cursor to request the next one with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_key: Option<i64>,
}

impl<T> Page<T> {
    fn new(items: Vec<T>, options: &QueryOptions, key: impl Fn(&T) -> i64) -> Self {
        let next_page_key = options
            .paging
            .next_page(&items, key)
            .and_then(|paging| paging.key);
        Self {
            items,
            next_page_key,
        }
    }
}

/// Snapshot of ingestion progress and the newest page of every listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainStatus {
    pub latest_batch_number: Option<i64>,
    pub last_l1_batch_item: LastItem,
    pub last_final_batch_number: i64,
    pub last_l1_bridge_item: LastItem,
    pub last_l2_bridge_item: LastItem,
    pub batches_count: u64,
    pub deposits_count: u64,
    pub withdrawals_count: u64,
    pub batches: Page<Batch>,
    pub deposits: Page<Bridge>,
    pub withdrawals: Page<Bridge>,
}

impl ChainReader {
    #[instrument(skip(self, options), fields(repo = ?options.repo, paging = ?options.paging))]
    pub async fn status(&self, options: &QueryOptions) -> Result<ChainStatus, ReaderError> {
        let latest_batch_number = match self.batch(BatchSelector::Latest, options).await {
            Ok(batch) => Some(batch.number()),
            Err(ReaderError::NotFound(_)) => None,
            Err(err) => return Err(err),
        };

        Ok(ChainStatus {
            latest_batch_number,
            last_l1_batch_item: self.last_l1_batch_item().await?,
            last_final_batch_number: self.last_final_batch_number().await?,
            last_l1_bridge_item: self.last_l1_bridge_item().await?,
            last_l2_bridge_item: self.last_l2_bridge_item().await?,
            batches_count: self.batches_count(options).await?,
            deposits_count: self.deposits_count(options).await?,
            withdrawals_count: self.withdrawals_count(options).await?,
            batches: Page::new(self.batches(options).await?, options, Batch::number),
            deposits: Page::new(self.deposits(options).await?, options, |op| op.index),
            withdrawals: Page::new(self.withdrawals(options).await?, options, |op| op.index),
        })
    }
}
