use serde::{Serialize, Serializer};
use std::fmt;

use crate::entities::{scroll_batch_bundles, scroll_batches, scroll_bridge};

pub type BlockNumber = i64;

/// A single deposit or withdrawal row.
pub type Bridge = scroll_bridge::Model;

/// Raw transaction hash as stored in the database, printed as `0x`-prefixed hex.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TxHash(Vec<u8>);

impl From<Vec<u8>> for TxHash {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Last indexed L1/L2 position. Defaults to block `0` with no hash when nothing
/// has been indexed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LastItem {
    pub block_number: BlockNumber,
    pub transaction_hash: Option<TxHash>,
}

impl LastItem {
    pub fn new(block_number: BlockNumber, transaction_hash: Option<Vec<u8>>) -> Self {
        Self {
            block_number,
            transaction_hash: transaction_hash.map(TxHash::from),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSelector {
    Latest,
    Number(u64),
}

/// A committed batch together with the bundle that finalized it.
///
/// `bundle` is only loaded when [`crate::BatchAssociation::Bundle`] is requested,
/// so `None` means either "not requested" or "not finalized yet".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    #[serde(flatten)]
    pub batch: scroll_batches::Model,
    pub bundle: Option<scroll_batch_bundles::Model>,
}

impl Batch {
    pub fn without_bundle(batch: scroll_batches::Model) -> Self {
        Self {
            batch,
            bundle: None,
        }
    }

    pub fn number(&self) -> i64 {
        self.batch.number
    }
}

impl From<(scroll_batches::Model, Option<scroll_batch_bundles::Model>)> for Batch {
    fn from((batch, bundle): (scroll_batches::Model, Option<scroll_batch_bundles::Model>)) -> Self {
        Self { batch, bundle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_hash_renders_as_prefixed_hex() {
        let hash = TxHash::from(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hash.to_string(), "0xdeadbeef");
        assert_eq!(format!("{:?}", hash), "0xdeadbeef");
        assert_eq!(
            serde_json::to_string(&hash).unwrap(),
            "\"0xdeadbeef\"".to_owned()
        );
    }

    #[test]
    fn last_item_defaults_to_block_zero_without_hash() {
        let item = LastItem::default();
        assert_eq!(item.block_number, 0);
        assert!(item.transaction_hash.is_none());
        assert_eq!(LastItem::new(0, None), item);
    }

    #[test]
    fn batch_serializes_timestamps_and_flattens_columns() {
        let batch = Batch::without_bundle(scroll_batches::Model {
            number: 4,
            commit_transaction_hash: None,
            commit_block_number: 1_004,
            commit_timestamp: sea_orm::prelude::DateTimeUtc::from_timestamp(1_700_000_000, 0),
            bundle_id: None,
            l2_block_range_start: Some(10),
            l2_block_range_end: Some(20),
            container: None,
        });

        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["number"], 4);
        assert_eq!(json["commit_timestamp"], "2023-11-14T22:13:20Z");
        assert!(json["bundle"].is_null());
    }
}
