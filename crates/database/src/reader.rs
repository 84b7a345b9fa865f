use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::options::Repo;

/// Read-only accessors over indexed Scroll batches, bundles and bridge operations.
#[derive(Clone, Debug)]
pub struct ChainReader {
    pub primary: DatabaseConnection,
    pub replica: Option<DatabaseConnection>,
}

impl ChainReader {
    pub fn new(primary: DatabaseConnection, replica: Option<DatabaseConnection>) -> Self {
        Self { primary, replica }
    }

    pub(crate) fn db(&self, repo: Repo) -> &DatabaseConnection {
        match (repo, &self.replica) {
            (Repo::Replica, Some(replica)) => replica,
            (Repo::Replica, None) => {
                debug!("No replica configured, reading from primary");
                &self.primary
            }
            (Repo::Primary, _) => &self.primary,
        }
    }
}
