use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select};
use tracing::{debug, instrument};

use crate::{
    entities::{scroll_bridge, sea_orm_active_enums::BridgeOperationType},
    error::ReaderError,
    options::QueryOptions,
    pagination::paginate_desc,
    reader::ChainReader,
    types::{Bridge, LastItem},
};

impl BridgeOperationType {
    /// Hash of the leg that originates the operation: L1 for deposits, L2 for withdrawals.
    fn origin_hash_column(self) -> scroll_bridge::Column {
        match self {
            BridgeOperationType::Deposit => scroll_bridge::Column::L1TransactionHash,
            BridgeOperationType::Withdrawal => scroll_bridge::Column::L2TransactionHash,
        }
    }
}

/// Operations of one direction whose originating transaction is known.
fn listed_operations(operation_type: BridgeOperationType) -> Select<scroll_bridge::Entity> {
    scroll_bridge::Entity::find()
        .filter(scroll_bridge::Column::OperationType.eq(operation_type))
        .filter(operation_type.origin_hash_column().is_not_null())
}

impl ChainReader {
    /// Newest deposit seen on L1, `(0, None)` when none is indexed.
    #[instrument(skip(self))]
    pub async fn last_l1_bridge_item(&self) -> Result<LastItem, ReaderError> {
        self.last_bridge_item(BridgeOperationType::Deposit).await
    }

    /// Newest withdrawal seen on L2, `(0, None)` when none is indexed.
    #[instrument(skip(self))]
    pub async fn last_l2_bridge_item(&self) -> Result<LastItem, ReaderError> {
        self.last_bridge_item(BridgeOperationType::Withdrawal).await
    }

    #[instrument(skip(self, options), fields(repo = ?options.repo, paging = ?options.paging))]
    pub async fn deposits(&self, options: &QueryOptions) -> Result<Vec<Bridge>, ReaderError> {
        self.bridge_operations(BridgeOperationType::Deposit, options)
            .await
    }

    #[instrument(skip(self, options), fields(repo = ?options.repo))]
    pub async fn deposits_count(&self, options: &QueryOptions) -> Result<u64, ReaderError> {
        self.bridge_operations_count(BridgeOperationType::Deposit, options)
            .await
    }

    #[instrument(skip(self, options), fields(repo = ?options.repo, paging = ?options.paging))]
    pub async fn withdrawals(&self, options: &QueryOptions) -> Result<Vec<Bridge>, ReaderError> {
        self.bridge_operations(BridgeOperationType::Withdrawal, options)
            .await
    }

    #[instrument(skip(self, options), fields(repo = ?options.repo))]
    pub async fn withdrawals_count(&self, options: &QueryOptions) -> Result<u64, ReaderError> {
        self.bridge_operations_count(BridgeOperationType::Withdrawal, options)
            .await
    }

    async fn last_bridge_item(
        &self,
        operation_type: BridgeOperationType,
    ) -> Result<LastItem, ReaderError> {
        let last = scroll_bridge::Entity::find()
            .filter(scroll_bridge::Column::OperationType.eq(operation_type))
            .filter(scroll_bridge::Column::BlockNumber.is_not_null())
            .order_by_desc(scroll_bridge::Column::Index)
            .one(&self.primary)
            .await?;

        let item = last
            .and_then(|operation| {
                let hash = match operation_type {
                    BridgeOperationType::Deposit => operation.l1_transaction_hash,
                    BridgeOperationType::Withdrawal => operation.l2_transaction_hash,
                };
                operation
                    .block_number
                    .map(|block_number| LastItem::new(block_number, hash))
            })
            .unwrap_or_default();

        Ok(item)
    }

    async fn bridge_operations(
        &self,
        operation_type: BridgeOperationType,
        options: &QueryOptions,
    ) -> Result<Vec<Bridge>, ReaderError> {
        if options.paging.is_exhausted() {
            return Ok(Vec::new());
        }

        let operations = paginate_desc(
            listed_operations(operation_type),
            scroll_bridge::Column::Index,
            &options.paging,
        )
        .all(self.db(options.repo))
        .await?;

        debug!(
            operation_type = ?operation_type,
            count = operations.len(),
            "Fetched bridge operations"
        );
        Ok(operations)
    }

    async fn bridge_operations_count(
        &self,
        operation_type: BridgeOperationType,
        options: &QueryOptions,
    ) -> Result<u64, ReaderError> {
        let count = listed_operations(operation_type)
            .count(self.db(options.repo))
            .await?;

        Ok(count)
    }
}
