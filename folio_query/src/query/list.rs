//! # List query.
//!
//! Utility for building paged and ordered list queries from raw request
//! parameters.

use crate::{
    mapping::PropertyMapping,
    ordering::{Ordering, OrderingTerm, ResolvedOrdering},
    query::error::QueryResult,
};

/// Represents a list query.
///
/// List queries select one page of an ordered collection. Filtering is the
/// caller's concern and must be applied before paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page_number: usize,
    pub page_size: usize,
    pub ordering: ResolvedOrdering,
}

/// Config for list query builder.
///
/// `default_ordering` should probably never be `None`. If the request does
/// not contain an ordering source, the builder falls back to it; without
/// one, equal requests are only ordered by storage order.
#[derive(Debug, Clone)]
pub struct ListQueryConfig {
    pub default_page_size: usize,
    pub max_page_size: Option<usize>,
    pub default_ordering: Option<OrderingTerm>,
}

#[derive(Debug, Clone)]
pub struct ListQueryBuilder {
    mapping: PropertyMapping,
    config: ListQueryConfig,
}

impl Default for ListQueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: None,
            default_ordering: None,
        }
    }
}

impl ListQueryBuilder {
    pub fn new(mapping: PropertyMapping, config: ListQueryConfig) -> Self {
        Self { mapping, config }
    }

    /// Builds a list query from raw request parameters.
    ///
    /// Paging parameters degrade instead of failing: an absent or zero
    /// page size becomes the default, an oversized one is clamped to the
    /// maximum, and the page number is clamped later during slicing.
    ///
    /// # Errors
    ///
    /// Fails if the ordering source cannot be parsed or contains a key the
    /// mapping does not know.
    pub fn build(
        &self,
        order_by: Option<&str>,
        page_number: usize,
        page_size: Option<usize>,
    ) -> QueryResult<ListQuery> {
        // Empty string is considered as None; query strings often carry
        // present-but-empty parameters.
        let ordering = match order_by.filter(|source| !source.trim().is_empty()) {
            Some(source) => Ordering::parse(source)?,
            None => Ordering::new(self.config.default_ordering.iter().cloned().collect()),
        };
        let ordering = ordering.resolve(&self.mapping)?;

        let mut page_size = match page_size {
            None | Some(0) => self.config.default_page_size,
            Some(size) => size,
        };
        if let Some(max_page_size) = self.config.max_page_size {
            // Intentionally clamp page size to max page size.
            if page_size > max_page_size {
                page_size = max_page_size;
            }
        }

        Ok(ListQuery {
            page_number,
            page_size,
            ordering,
        })
    }

    pub fn mapping(&self) -> &PropertyMapping {
        &self.mapping
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ordering::{OrderingDirection, error::OrderingError},
        query::error::QueryError,
        testing::record::MemberItem,
    };

    use super::*;

    #[test]
    fn it_works() {
        let qb = get_query_builder();
        let query = qb.build(Some("seniority desc"), 2, Some(10_000)).unwrap();
        assert_eq!(query.page_number, 2);
        assert_eq!(query.page_size, 20);
        assert!(!query.ordering.is_empty());
    }

    #[test]
    fn defaults() {
        let qb = get_query_builder();
        for order_by in [None, Some(""), Some("   ")] {
            let query = qb.build(order_by, 1, None).unwrap();
            assert_eq!(query.page_size, 10);
            // Falls back to the configured default ordering.
            assert!(!query.ordering.is_empty());
        }
        assert_eq!(qb.build(None, 1, Some(0)).unwrap().page_size, 10);
    }

    #[test]
    fn errors() {
        let qb = get_query_builder();
        assert!(matches!(
            qb.build(Some("shoe_size"), 1, None).unwrap_err(),
            QueryError::Ordering(OrderingError::UnknownKey(key)) if key == "shoe_size"
        ));
        assert!(matches!(
            qb.build(Some("name, name desc"), 1, None).unwrap_err(),
            QueryError::Ordering(OrderingError::DuplicateField(_))
        ));
    }

    fn get_query_builder() -> ListQueryBuilder {
        ListQueryBuilder::new(
            MemberItem::property_mapping(),
            ListQueryConfig {
                default_page_size: 10,
                max_page_size: Some(20),
                default_ordering: Some(OrderingTerm {
                    name: "name".into(),
                    direction: OrderingDirection::Ascending,
                }),
            },
        )
    }
}
