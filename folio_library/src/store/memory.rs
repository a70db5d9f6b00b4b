use folio_common::id::Id;

use crate::{
    model::Author,
    store::{LibraryStore, PersistenceError},
};

/// In-memory implementation of the library store.
///
/// Authors are kept in insertion order, which doubles as the storage order
/// that stable sorting falls back to for equal keys.
#[derive(Debug, Default)]
pub struct MemoryLibraryStore {
    authors: Vec<Author>,
    pending: usize,
}

impl MemoryLibraryStore {
    /// Creates a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new memory store with initial data.
    ///
    /// Seeded records count as already committed.
    #[must_use]
    pub fn with_data(authors: Vec<Author>) -> Self {
        Self {
            authors,
            pending: 0,
        }
    }

    /// Number of mutations since the last commit.
    #[must_use]
    pub const fn pending_changes(&self) -> usize {
        self.pending
    }
}

impl LibraryStore for MemoryLibraryStore {
    fn authors(&self) -> Vec<Author> {
        self.authors.clone()
    }

    fn author(&self, id: Id) -> Option<Author> {
        self.authors.iter().find(|author| author.id == id).cloned()
    }

    fn insert_author(&mut self, author: Author) {
        self.authors.push(author);
        self.pending += 1;
    }

    fn replace_author(&mut self, author: Author) -> bool {
        if let Some(stored) = self.authors.iter_mut().find(|stored| stored.id == author.id) {
            *stored = author;
            self.pending += 1;
            true
        } else {
            false
        }
    }

    fn remove_author(&mut self, id: Id) -> bool {
        let before = self.authors.len();
        self.authors.retain(|author| author.id != id);
        if self.authors.len() < before {
            self.pending += 1;
            true
        } else {
            false
        }
    }

    fn commit(&mut self) -> Result<usize, PersistenceError> {
        let committed = self.pending;
        self.pending = 0;
        Ok(committed)
    }
}
