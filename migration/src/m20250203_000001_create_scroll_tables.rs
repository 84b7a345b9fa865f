use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum ScrollBatchBundles {
    #[sea_orm(iden = "scroll_batch_bundles")]
    Table,
    Id,
    FinalBatchNumber,
    FinalizeTransactionHash,
    FinalizeBlockNumber,
    FinalizeTimestamp,
}

#[derive(DeriveIden)]
enum ScrollBatches {
    #[sea_orm(iden = "scroll_batches")]
    Table,
    Number,
    CommitTransactionHash,
    CommitBlockNumber,
    CommitTimestamp,
    BundleId,
    L2BlockRangeStart,
    L2BlockRangeEnd,
    Container,
}

#[derive(DeriveIden)]
enum ScrollBridge {
    #[sea_orm(iden = "scroll_bridge")]
    Table,
    #[sea_orm(iden = "type")]
    OperationType,
    Index,
    L1TransactionHash,
    L2TransactionHash,
    BlockNumber,
    BlockTimestamp,
    MessageHash,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Bundles first, batches reference them once finalized
        manager
            .create_table(
                Table::create()
                    .table(ScrollBatchBundles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScrollBatchBundles::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScrollBatchBundles::FinalBatchNumber)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScrollBatchBundles::FinalizeTransactionHash).blob())
                    .col(ColumnDef::new(ScrollBatchBundles::FinalizeBlockNumber).big_integer())
                    .col(
                        ColumnDef::new(ScrollBatchBundles::FinalizeTimestamp)
                            .timestamp_with_time_zone(),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. Batches
        manager
            .create_table(
                Table::create()
                    .table(ScrollBatches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScrollBatches::Number)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScrollBatches::CommitTransactionHash).blob())
                    .col(
                        ColumnDef::new(ScrollBatches::CommitBlockNumber)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScrollBatches::CommitTimestamp).timestamp_with_time_zone())
                    .col(ColumnDef::new(ScrollBatches::BundleId).big_integer())
                    .col(ColumnDef::new(ScrollBatches::L2BlockRangeStart).big_integer())
                    .col(ColumnDef::new(ScrollBatches::L2BlockRangeEnd).big_integer())
                    .col(ColumnDef::new(ScrollBatches::Container).string_len(16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scroll_batches_bundle_id")
                            .from(ScrollBatches::Table, ScrollBatches::BundleId)
                            .to(ScrollBatchBundles::Table, ScrollBatchBundles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scroll_batches_bundle_id")
                    .table(ScrollBatches::Table)
                    .col(ScrollBatches::BundleId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scroll_batches_l2_block_range")
                    .table(ScrollBatches::Table)
                    .col(ScrollBatches::L2BlockRangeStart)
                    .col(ScrollBatches::L2BlockRangeEnd)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 3. Bridge operations, keyed by direction and per-direction index
        manager
            .create_table(
                Table::create()
                    .table(ScrollBridge::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScrollBridge::OperationType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScrollBridge::Index).big_integer().not_null())
                    .col(ColumnDef::new(ScrollBridge::L1TransactionHash).blob())
                    .col(ColumnDef::new(ScrollBridge::L2TransactionHash).blob())
                    .col(ColumnDef::new(ScrollBridge::BlockNumber).big_integer())
                    .col(ColumnDef::new(ScrollBridge::BlockTimestamp).timestamp_with_time_zone())
                    .col(ColumnDef::new(ScrollBridge::MessageHash).blob())
                    .primary_key(
                        Index::create()
                            .col(ScrollBridge::OperationType)
                            .col(ScrollBridge::Index),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scroll_bridge_type_block_number")
                    .table(ScrollBridge::Table)
                    .col(ScrollBridge::OperationType)
                    .col(ScrollBridge::BlockNumber)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScrollBridge::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScrollBatches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScrollBatchBundles::Table).to_owned())
            .await?;

        Ok(())
    }
}
