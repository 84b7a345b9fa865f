use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    SelectTwo,
};
use tracing::{debug, instrument};

use crate::{
    entities::{scroll_batch_bundles, scroll_batches},
    error::ReaderError,
    options::{BatchAssociation, Necessity, QueryOptions},
    pagination::paginate_desc,
    reader::ChainReader,
    types::{Batch, BatchSelector, LastItem},
};

impl ChainReader {
    /// Looks up a single batch. `Latest` ignores the requested associations.
    #[instrument(skip(self, options), fields(repo = ?options.repo))]
    pub async fn batch(
        &self,
        selector: BatchSelector,
        options: &QueryOptions,
    ) -> Result<Batch, ReaderError> {
        let db = self.db(options.repo);

        match selector {
            BatchSelector::Latest => scroll_batches::Entity::find()
                .order_by_desc(scroll_batches::Column::Number)
                .one(db)
                .await?
                .map(Batch::without_bundle)
                .ok_or_else(|| ReaderError::NotFound("latest batch".to_owned())),
            BatchSelector::Number(number) => {
                let not_found = || ReaderError::NotFound(format!("batch {}", number));
                let number = i64::try_from(number).map_err(|_| not_found())?;

                let query = scroll_batches::Entity::find()
                    .filter(scroll_batches::Column::Number.eq(number));
                fetch_one(query, options, db).await?.ok_or_else(not_found)
            }
        }
    }

    /// Batch whose (inclusive) L2 block range contains `block_number`.
    #[instrument(skip(self, options), fields(repo = ?options.repo))]
    pub async fn batch_by_l2_block_number(
        &self,
        block_number: u64,
        options: &QueryOptions,
    ) -> Result<Batch, ReaderError> {
        let not_found =
            || ReaderError::NotFound(format!("batch containing L2 block {}", block_number));
        let block_number = i64::try_from(block_number).map_err(|_| not_found())?;

        let query = scroll_batches::Entity::find()
            .filter(scroll_batches::Column::L2BlockRangeStart.lte(block_number))
            .filter(scroll_batches::Column::L2BlockRangeEnd.gte(block_number))
            .order_by_desc(scroll_batches::Column::Number);

        fetch_one(query, options, self.db(options.repo))
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(self, options), fields(repo = ?options.repo, paging = ?options.paging))]
    pub async fn batches(&self, options: &QueryOptions) -> Result<Vec<Batch>, ReaderError> {
        if options.paging.is_exhausted() {
            return Ok(Vec::new());
        }

        let query = paginate_desc(
            scroll_batches::Entity::find(),
            scroll_batches::Column::Number,
            &options.paging,
        );
        let batches = fetch_all(query, options, self.db(options.repo)).await?;

        debug!(count = batches.len(), "Fetched batches");
        Ok(batches)
    }

    #[instrument(skip(self, options), fields(repo = ?options.repo))]
    pub async fn batches_count(&self, options: &QueryOptions) -> Result<u64, ReaderError> {
        let count = scroll_batches::Entity::find()
            .count(self.db(options.repo))
            .await?;

        Ok(count)
    }

    /// Commit position of the newest batch, `(0, None)` when no batch is indexed.
    #[instrument(skip(self))]
    pub async fn last_l1_batch_item(&self) -> Result<LastItem, ReaderError> {
        let item = scroll_batches::Entity::find()
            .order_by_desc(scroll_batches::Column::Number)
            .one(&self.primary)
            .await?
            .map(|batch| LastItem::new(batch.commit_block_number, batch.commit_transaction_hash))
            .unwrap_or_default();

        Ok(item)
    }

    /// Highest batch number covered by the newest bundle, `-1` when nothing is finalized.
    #[instrument(skip(self))]
    pub async fn last_final_batch_number(&self) -> Result<i64, ReaderError> {
        let number = scroll_batch_bundles::Entity::find()
            .order_by_desc(scroll_batch_bundles::Column::Id)
            .one(&self.primary)
            .await?
            .map(|bundle| bundle.final_batch_number)
            .unwrap_or(-1);

        Ok(number)
    }
}

/// Joins the finalizing bundle, dropping unfinalized batches when it is required.
fn join_bundle(
    query: Select<scroll_batches::Entity>,
    necessity: Necessity,
) -> SelectTwo<scroll_batches::Entity, scroll_batch_bundles::Entity> {
    let query = query.find_also_related(scroll_batch_bundles::Entity);
    match necessity {
        Necessity::Required => query.filter(scroll_batch_bundles::Column::Id.is_not_null()),
        Necessity::Optional => query,
    }
}

async fn fetch_one(
    query: Select<scroll_batches::Entity>,
    options: &QueryOptions,
    db: &DatabaseConnection,
) -> Result<Option<Batch>, ReaderError> {
    let batch = match options.necessity(BatchAssociation::Bundle) {
        None => query.one(db).await?.map(Batch::without_bundle),
        Some(necessity) => join_bundle(query, necessity)
            .one(db)
            .await?
            .map(Batch::from),
    };

    Ok(batch)
}

async fn fetch_all(
    query: Select<scroll_batches::Entity>,
    options: &QueryOptions,
    db: &DatabaseConnection,
) -> Result<Vec<Batch>, ReaderError> {
    let batches = match options.necessity(BatchAssociation::Bundle) {
        None => query
            .all(db)
            .await?
            .into_iter()
            .map(Batch::without_bundle)
            .collect(),
        Some(necessity) => join_bundle(query, necessity)
            .all(db)
            .await?
            .into_iter()
            .map(Batch::from)
            .collect(),
    };

    Ok(batches)
}
