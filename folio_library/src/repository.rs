use folio_common::id::Id;
use folio_query::{
    mapping::PropertyMappingRegistry,
    ordering::{OrderingDirection, OrderingTerm},
    page::PagedList,
    query::list::{ListQueryBuilder, ListQueryConfig},
};
use tracing::debug;

use crate::{
    error::{RepositoryError, RepositoryResult},
    model::{Author, AuthorSummary, Book},
    store::LibraryStore,
};

/// Default number of authors per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Upper bound a requested page size is clamped to.
pub const MAX_PAGE_SIZE: usize = 20;

/// Raw author list parameters, as read from a request.
///
/// None of these are ever rejected: absent filters filter nothing, the
/// page number is clamped during slicing and the page size degrades to
/// the default.
#[derive(Debug, Clone, Default)]
pub struct AuthorListParams {
    /// Exact-match genre filter.
    pub genre: Option<String>,
    /// Free-text search over name parts and genre.
    pub search_query: Option<String>,
    /// Comma-separated ordering over [`AuthorSummary`] keys.
    pub order_by: Option<String>,
    /// 1-based page number.
    pub page_number: usize,
    pub page_size: Option<usize>,
}

/// Repository over the library store.
///
/// Composes the property mapping table, the sort applicator and the paged
/// result container to answer paged author queries, and stages mutations
/// on the store until [`save`](LibraryRepository::save).
#[derive(Debug)]
pub struct LibraryRepository<S> {
    store: S,
    mappings: PropertyMappingRegistry,
    author_queries: ListQueryBuilder,
}

impl<S: LibraryStore> LibraryRepository<S> {
    pub fn new(store: S) -> Self {
        let mut mappings = PropertyMappingRegistry::new();
        mappings.register::<AuthorSummary, Author>(Author::property_mapping());

        let author_queries = ListQueryBuilder::new(
            Author::property_mapping(),
            ListQueryConfig {
                default_page_size: DEFAULT_PAGE_SIZE,
                max_page_size: Some(MAX_PAGE_SIZE),
                default_ordering: Some(OrderingTerm {
                    name: "name".into(),
                    direction: OrderingDirection::Ascending,
                }),
            },
        );

        Self {
            store,
            mappings,
            author_queries,
        }
    }

    /// Registered property mappings, for callers that validate ordering
    /// parameters before running a query.
    pub fn mappings(&self) -> &PropertyMappingRegistry {
        &self.mappings
    }

    pub fn author_exists(&self, author_id: Id) -> bool {
        self.store.author(author_id).is_some()
    }

    /// Looks up a single author.
    pub fn author(&self, author_id: Id) -> Option<Author> {
        self.store.author(author_id)
    }

    /// Looks up authors by id, in input order.
    ///
    /// Missing ids yield `None` placeholders rather than an error; callers
    /// detect partial not-found through the placeholders themselves.
    pub fn authors_by_ids(&self, ids: &[Id]) -> Vec<Option<Author>> {
        ids.iter().map(|id| self.store.author(*id)).collect()
    }

    /// Answers one page of filtered, sorted authors.
    ///
    /// The collection is sorted first and filtered second; both happen
    /// before paging, so page metadata reflects the filtered totals.
    ///
    /// # Errors
    ///
    /// Fails when `order_by` cannot be parsed or names an unmapped key.
    pub fn authors(&self, params: &AuthorListParams) -> RepositoryResult<PagedList<Author>> {
        let query = self.author_queries.build(
            params.order_by.as_deref(),
            params.page_number,
            params.page_size,
        )?;

        let mut authors = self.store.authors();
        query.ordering.sort_slice(&mut authors);

        if let Some(genre) = normalized(params.genre.as_deref()) {
            authors.retain(|author| author.genre.to_lowercase() == genre);
        }

        if let Some(search) = normalized(params.search_query.as_deref()) {
            authors.retain(|author| {
                author.genre.to_lowercase().contains(&search)
                    || author.first_name.to_lowercase().contains(&search)
                    || author.last_name.to_lowercase().contains(&search)
            });
        }

        debug!(
            matched = authors.len(),
            page_number = query.page_number,
            page_size = query.page_size,
            "listing authors"
        );
        Ok(PagedList::create(authors, query.page_number, query.page_size))
    }

    /// Stages a new author.
    ///
    /// Assigns a fresh id when the record carries the nil id, and cascades
    /// one level deep: nested books without ids get fresh ones, and all
    /// nested books are stamped with the author's id.
    pub fn add_author(&mut self, mut author: Author) -> Id {
        if author.id.is_nil() {
            author.id = Id::generate();
        }
        let author_id = author.id;
        for book in &mut author.books {
            if book.id.is_nil() {
                book.id = Id::generate();
            }
            book.author_id = author_id;
        }

        debug!(%author_id, books = author.books.len(), "adding author");
        self.store.insert_author(author);
        author_id
    }

    /// Top-level author updates are not supported.
    ///
    /// # Errors
    ///
    /// Always fails with [`RepositoryError::NotSupported`].
    pub fn update_author(&mut self, _author: &Author) -> RepositoryResult<()> {
        Err(RepositoryError::NotSupported)
    }

    /// Stages removal of an author and its books.
    pub fn delete_author(&mut self, author_id: Id) -> bool {
        debug!(%author_id, "deleting author");
        self.store.remove_author(author_id)
    }

    pub fn books_for_author(&self, author_id: Id) -> Vec<Book> {
        self.store
            .author(author_id)
            .map(|author| author.books)
            .unwrap_or_default()
    }

    pub fn book_for_author(&self, author_id: Id, book_id: Id) -> Option<Book> {
        self.store
            .author(author_id)?
            .books
            .into_iter()
            .find(|book| book.id == book_id)
    }

    /// Stages a new book under an existing author.
    ///
    /// An id is generated only when the book carries the nil id, so
    /// callers may supply their own for upserts. Returns `None` without
    /// staging anything when the author does not exist.
    pub fn add_book_for_author(&mut self, author_id: Id, mut book: Book) -> Option<Id> {
        let mut author = self.store.author(author_id)?;
        if book.id.is_nil() {
            book.id = Id::generate();
        }
        book.author_id = author_id;
        let book_id = book.id;

        author.books.push(book);
        debug!(%author_id, %book_id, "adding book for author");
        self.store.replace_author(author);
        Some(book_id)
    }

    /// Stages an updated book record under its author.
    ///
    /// This is the explicit mark-changed call: the store observes no
    /// mutation until the changed record is put back. Returns false when
    /// the author or the book is unknown.
    pub fn update_book_for_author(&mut self, book: &Book) -> bool {
        let Some(mut author) = self.store.author(book.author_id) else {
            return false;
        };
        let Some(stored) = author.books.iter_mut().find(|stored| stored.id == book.id) else {
            return false;
        };
        *stored = book.clone();

        debug!(author_id = %book.author_id, book_id = %book.id, "updating book for author");
        self.store.replace_author(author)
    }

    /// Stages removal of a book from its author.
    pub fn delete_book(&mut self, author_id: Id, book_id: Id) -> bool {
        let Some(mut author) = self.store.author(author_id) else {
            return false;
        };
        let before = author.books.len();
        author.books.retain(|book| book.id != book_id);
        if author.books.len() == before {
            return false;
        }

        debug!(%author_id, %book_id, "deleting book");
        self.store.replace_author(author)
    }

    /// Commits pending changes.
    ///
    /// # Errors
    ///
    /// Fails with [`RepositoryError::Persistence`] when the store's commit
    /// fails; a successful commit of zero pending changes still succeeds.
    pub fn save(&mut self) -> RepositoryResult<bool> {
        let committed = self.store.commit()?;
        debug!(committed, "saved pending changes");
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Trims and case-folds an optional filter value; empty means absent.
fn normalized(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}
