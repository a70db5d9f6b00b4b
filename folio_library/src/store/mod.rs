use folio_common::id::Id;
use thiserror::Error;

use crate::model::Author;

pub mod memory;

pub use memory::MemoryLibraryStore;

/// A commit failure reported by a store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("commit failed: {reason}")]
pub struct PersistenceError {
    pub reason: String,
}

/// Narrow storage interface the repository is written against.
///
/// Mutations become visible to reads immediately and are accumulated as
/// pending changes until [`commit`](LibraryStore::commit) settles them,
/// one logical unit of work per commit. The store owns transaction
/// discipline; callers never see partial commits.
pub trait LibraryStore {
    /// Snapshot of all authors in storage order.
    ///
    /// Storage order is deterministic and is the tie-breaking order that
    /// stable sorting preserves.
    fn authors(&self) -> Vec<Author>;

    /// Looks up a single author.
    fn author(&self, id: Id) -> Option<Author>;

    /// Adds a new author at the end of the storage order.
    fn insert_author(&mut self, author: Author);

    /// Replaces a stored author with the given record, matched by id.
    ///
    /// This is the explicit mark-changed operation: a caller that mutated
    /// a record must put it back for the change to count. Returns false
    /// when no stored author has the record's id.
    fn replace_author(&mut self, author: Author) -> bool;

    /// Removes an author and, by containment, its books.
    fn remove_author(&mut self, id: Id) -> bool;

    /// Commits pending changes, returning how many were settled.
    ///
    /// # Errors
    ///
    /// Fails with [`PersistenceError`] when the underlying commit fails;
    /// pending changes are then still considered pending.
    fn commit(&mut self) -> Result<usize, PersistenceError>;
}
