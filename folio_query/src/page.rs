use serde::Serialize;

/// One page of an ordered sequence, with pagination metadata.
///
/// Page selection clamps instead of failing: a request for a page beyond
/// the last one returns the last page, and page zero returns the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    items: Vec<T>,
    current_page: usize,
    total_pages: usize,
    page_size: usize,
    total_count: usize,
}

/// Pagination metadata, serializable into response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub total_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl<T> PagedList<T> {
    /// Slices one page out of an ordered sequence.
    ///
    /// A zero `page_size` is treated as one.
    #[must_use]
    pub fn create(source: Vec<T>, page_number: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_count = source.len();
        let total_pages = total_count.div_ceil(page_size);
        let current_page = page_number.clamp(1, total_pages.max(1));

        let items: Vec<T> = source
            .into_iter()
            .skip((current_page - 1) * page_size)
            .take(page_size)
            .collect();

        Self {
            items,
            current_page,
            total_pages,
            page_size,
            total_count,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    #[must_use]
    pub const fn metadata(&self) -> PageMetadata {
        PageMetadata {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}
