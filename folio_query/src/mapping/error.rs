use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    NotFound { source: String, destination: String },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::NotFound {
                source,
                destination,
            } => write!(
                f,
                "no property mapping registered from `{source}` to `{destination}`"
            ),
        }
    }
}

impl Error for MappingError {}

pub type MappingResult<T> = Result<T, MappingError>;
