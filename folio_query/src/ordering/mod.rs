use std::{
    cmp,
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

use itertools::Itertools;

use crate::mapping::{FieldMapped, PropertyMapping};

use self::error::{OrderingError, OrderingResult};

pub mod error;

/// A client-requested ordering, parsed but not yet resolved against a
/// property mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ordering {
    pub terms: Vec<OrderingTerm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingTerm {
    pub name: String,
    pub direction: OrderingDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingDirection {
    #[default]
    Ascending,
    Descending,
}

/// An ordering resolved against a property mapping.
///
/// Each requested term contributes its mapped storage fields in listed
/// order, with the effective direction of a field being the requested
/// direction flipped by the field's revert flag. Terms are compared
/// lexicographically: the first key is primary, later keys break ties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedOrdering {
    keys: Vec<SortKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SortKey {
    field: String,
    descending: bool,
}

impl Ordering {
    pub fn new(terms: Vec<OrderingTerm>) -> Self {
        Ordering { terms }
    }

    /// Parses a comma-separated ordering source string.
    ///
    /// A term's last whitespace-separated word is an optional `asc`/`desc`
    /// qualifier, matched case-insensitively; anything else belongs to the
    /// key. Empty terms are skipped.
    ///
    /// # Errors
    ///
    /// Fails if the same key appears twice.
    pub fn parse(source: &str) -> OrderingResult<Ordering> {
        let mut terms = Vec::new();
        let mut term_names = BTreeSet::new();
        for parts in source
            .split(',')
            .map(|part| part.split_whitespace().collect_vec())
            .filter(|parts| !parts.is_empty())
        {
            let mut direction = OrderingDirection::Ascending;
            let mut name = String::new();
            let parts_len = parts.len();
            for (i, part) in parts.into_iter().enumerate() {
                if i < parts_len - 1 {
                    name.push_str(part);
                } else if part.eq_ignore_ascii_case("asc") {
                    direction = OrderingDirection::Ascending;
                } else if part.eq_ignore_ascii_case("desc") {
                    direction = OrderingDirection::Descending;
                } else {
                    name.push_str(part);
                }
            }

            if !term_names.insert(name.to_ascii_lowercase()) {
                return Err(OrderingError::DuplicateField(name));
            }

            terms.push(OrderingTerm { name, direction });
        }
        Ok(Ordering { terms })
    }

    /// Resolves every term's key through the mapping.
    ///
    /// # Errors
    ///
    /// Fails with [`OrderingError::UnknownKey`] for a key the mapping does
    /// not contain. An unresolvable key fails the whole ordering rather
    /// than being skipped.
    pub fn resolve(&self, mapping: &PropertyMapping) -> OrderingResult<ResolvedOrdering> {
        let mut keys = Vec::new();
        for term in &self.terms {
            let fields = mapping
                .get(&term.name)
                .ok_or_else(|| OrderingError::UnknownKey(term.name.clone()))?;
            for field in fields {
                keys.push(SortKey {
                    field: field.name.clone(),
                    descending: (term.direction == OrderingDirection::Descending)
                        != field.revert,
                });
            }
        }
        Ok(ResolvedOrdering { keys })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl ResolvedOrdering {
    /// Compares two records by the resolved sort keys.
    ///
    /// Returns `None` if some key's values are incomparable.
    pub fn evaluate<T>(&self, lhs: &T, rhs: &T) -> Option<cmp::Ordering>
    where
        T: FieldMapped,
    {
        for key in &self.keys {
            let a = lhs.get_field(&key.field);
            let b = rhs.get_field(&key.field);
            match a.partial_cmp(&b)? {
                cmp::Ordering::Less => {
                    return Some(if key.descending {
                        cmp::Ordering::Greater
                    } else {
                        cmp::Ordering::Less
                    });
                }
                cmp::Ordering::Greater => {
                    return Some(if key.descending {
                        cmp::Ordering::Less
                    } else {
                        cmp::Ordering::Greater
                    });
                }
                cmp::Ordering::Equal => {}
            }
        }
        Some(cmp::Ordering::Equal)
    }

    /// Sorts records in place.
    ///
    /// The sort is stable: records with equal keys keep their relative
    /// order, so repeated application is idempotent. Incomparable pairs
    /// are treated as equal.
    pub fn sort_slice<T>(&self, items: &mut [T])
    where
        T: FieldMapped,
    {
        items.sort_by(|a, b| self.evaluate(a, b).unwrap_or(cmp::Ordering::Equal));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Display for Ordering {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.terms.iter().map(ToString::to_string).join(", "))
    }
}

impl Display for OrderingTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.direction)
    }
}

impl Display for OrderingDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OrderingDirection::Ascending => f.write_str("asc"),
            OrderingDirection::Descending => f.write_str("desc"),
        }
    }
}
