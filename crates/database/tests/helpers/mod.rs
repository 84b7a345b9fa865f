#![allow(dead_code)]

use database::entities::{
    scroll_batch_bundles, scroll_batches, scroll_bridge,
    sea_orm_active_enums::{BatchContainer, BridgeOperationType},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, IntoActiveModel};

pub async fn init_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");
    db
}

pub fn hash(seed: u8) -> Vec<u8> {
    vec![seed; 32]
}

pub fn batch(number: i64) -> scroll_batches::Model {
    scroll_batches::Model {
        number,
        commit_transaction_hash: Some(hash(number as u8)),
        commit_block_number: 1_000 + number,
        commit_timestamp: None,
        bundle_id: None,
        l2_block_range_start: None,
        l2_block_range_end: None,
        container: Some(BatchContainer::InBlob4844),
    }
}

pub fn bundle(id: i64, final_batch_number: i64) -> scroll_batch_bundles::Model {
    scroll_batch_bundles::Model {
        id,
        final_batch_number,
        finalize_transaction_hash: Some(hash((id as u8).wrapping_add(200))),
        finalize_block_number: Some(2_000 + id),
        finalize_timestamp: None,
    }
}

pub fn deposit(index: i64) -> scroll_bridge::Model {
    scroll_bridge::Model {
        operation_type: BridgeOperationType::Deposit,
        index,
        l1_transaction_hash: Some(hash(index as u8)),
        l2_transaction_hash: None,
        block_number: Some(100 + index),
        block_timestamp: None,
        message_hash: Some(hash((index as u8).wrapping_add(100))),
    }
}

pub fn withdrawal(index: i64) -> scroll_bridge::Model {
    scroll_bridge::Model {
        operation_type: BridgeOperationType::Withdrawal,
        index,
        l1_transaction_hash: None,
        l2_transaction_hash: Some(hash(index as u8)),
        block_number: Some(500 + index),
        block_timestamp: None,
        message_hash: Some(hash((index as u8).wrapping_add(150))),
    }
}

pub async fn insert_bundles(db: &DatabaseConnection, bundles: Vec<scroll_batch_bundles::Model>) {
    scroll_batch_bundles::Entity::insert_many(
        bundles.into_iter().map(IntoActiveModel::into_active_model),
    )
    .exec_without_returning(db)
    .await
    .expect("failed to insert bundles");
}

pub async fn insert_batches(db: &DatabaseConnection, batches: Vec<scroll_batches::Model>) {
    scroll_batches::Entity::insert_many(
        batches.into_iter().map(IntoActiveModel::into_active_model),
    )
    .exec_without_returning(db)
    .await
    .expect("failed to insert batches");
}

pub async fn insert_bridge(db: &DatabaseConnection, operations: Vec<scroll_bridge::Model>) {
    scroll_bridge::Entity::insert_many(
        operations.into_iter().map(IntoActiveModel::into_active_model),
    )
    .exec_without_returning(db)
    .await
    .expect("failed to insert bridge operations");
}
