use thiserror::Error;

use folio_query::query::error::QueryError;

use crate::store::PersistenceError;

/// Repository error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The operation is not supported.
    ///
    /// Raised for top-level author updates; replace the record through
    /// delete and add instead.
    #[error("updating a top-level author is not supported")]
    NotSupported,
    /// Query building failed.
    #[error("query error: {0}")]
    Query(#[from] QueryError),
    /// The store failed to commit.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
