use sea_orm::DbErr;
use std::fmt;

#[derive(Debug)]
pub enum ReaderError {
    /// No row matched a single-row lookup.
    NotFound(String),
    Database(DbErr),
}

impl ReaderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReaderError::NotFound(_))
    }
}

impl From<DbErr> for ReaderError {
    fn from(err: DbErr) -> Self {
        ReaderError::Database(err)
    }
}

impl std::error::Error for ReaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReaderError::Database(err) => Some(err),
            ReaderError::NotFound(_) => None,
        }
    }
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderError::NotFound(what) => write!(f, "Not found: {}", what),
            ReaderError::Database(err) => write!(f, "Database error: {}", err),
        }
    }
}
