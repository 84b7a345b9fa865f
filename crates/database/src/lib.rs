pub mod batches;
pub mod bridge;
pub mod connect;
pub mod entities;
pub mod error;
pub mod options;
pub mod pagination;
pub mod reader;
pub mod status;
pub mod types;

pub use error::ReaderError;
pub use options::{BatchAssociation, Necessity, QueryOptions, Repo};
pub use pagination::PagingOptions;
pub use reader::ChainReader;
pub use status::{ChainStatus, Page};
pub use types::{Batch, BatchSelector, Bridge, LastItem, TxHash};
