use folio_common::id::Id;
use serde::{Deserialize, Serialize};

/// A book record, nested one level under its author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Identifier, nil until assigned by the repository.
    #[serde(default)]
    pub id: Id,
    /// Owning author, nil until the book is attached.
    #[serde(default)]
    pub author_id: Id,
    pub title: String,
    pub description: String,
}

impl Book {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Id::nil(),
            author_id: Id::nil(),
            title: title.into(),
            description: description.into(),
        }
    }
}
