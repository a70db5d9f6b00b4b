use thiserror::Error;

use crate::{mapping::error::MappingError, ordering::error::OrderingError};

/// Query processing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Ordering error.
    #[error("ordering error: {0}")]
    Ordering(#[from] OrderingError),
    /// Mapping error.
    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
