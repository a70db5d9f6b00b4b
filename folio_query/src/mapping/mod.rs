use std::{
    any::{TypeId, type_name},
    collections::{BTreeMap, HashMap},
};

use crate::value::Value;

use self::error::{MappingError, MappingResult};

pub mod error;

/// One storage field a public sort key resolves to.
///
/// `revert` flips the effective sort direction for this field, independent
/// of the direction the client requested. Used when the public key and the
/// storage field grow in opposite directions, e.g. a public `age` key
/// backed by a stored birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
    pub name: String,
    pub revert: bool,
}

/// Mapping from public sort-key names to storage fields.
///
/// Keys are matched case-insensitively. Every key maps to at least one
/// storage field.
#[derive(Debug, Clone, Default)]
pub struct PropertyMapping {
    fields: BTreeMap<String, Vec<MappedField>>,
}

/// Read-only registry of property mappings, keyed by source and
/// destination type.
///
/// Mappings are registered once at startup and only read afterwards, so
/// sharing a registry between threads is safe.
#[derive(Debug, Default)]
pub struct PropertyMappingRegistry {
    mappings: HashMap<(TypeId, TypeId), PropertyMapping>,
}

/// Trait for records whose fields can be looked up by storage field name.
///
/// This is the dispatch table that replaces reflection: each record type
/// lists its sortable fields once, and ordering resolution only ever asks
/// for names present in a [`PropertyMapping`].
pub trait FieldMapped {
    /// Gets field value by name.
    fn get_field(&self, name: &str) -> Value;
}

impl MappedField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revert: false,
        }
    }

    /// A field sorted in the direction opposite to the requested one.
    pub fn reverted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revert: true,
        }
    }
}

impl PropertyMapping {
    /// Creates a mapping from key-destinations pairs.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if a key maps to no storage fields.
    #[must_use]
    pub fn new(fields: BTreeMap<String, Vec<MappedField>>) -> Self {
        let fields: BTreeMap<String, Vec<MappedField>> = fields
            .into_iter()
            .map(|(key, targets)| {
                debug_assert!(!targets.is_empty(), "mapping key `{key}` has no fields");
                (key.to_ascii_lowercase(), targets)
            })
            .collect();
        Self { fields }
    }

    /// Gets the storage fields for a public sort key, case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[MappedField]> {
        self.fields
            .get(&key.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(&key.to_ascii_lowercase())
    }
}

impl PropertyMappingRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the mapping for a source/destination type pair.
    ///
    /// Registering the same pair twice replaces the earlier mapping.
    pub fn register<S: 'static, D: 'static>(&mut self, mapping: PropertyMapping) {
        self.mappings
            .insert((TypeId::of::<S>(), TypeId::of::<D>()), mapping);
    }

    /// Gets the mapping for a source/destination type pair.
    ///
    /// # Errors
    ///
    /// Fails with [`MappingError::NotFound`] if no mapping is registered
    /// for the pair.
    pub fn get<S: 'static, D: 'static>(&self) -> MappingResult<&PropertyMapping> {
        self.mappings
            .get(&(TypeId::of::<S>(), TypeId::of::<D>()))
            .ok_or_else(|| MappingError::NotFound {
                source: type_name::<S>().into(),
                destination: type_name::<D>().into(),
            })
    }

    #[must_use]
    pub fn contains<S: 'static, D: 'static>(&self) -> bool {
        self.mappings
            .contains_key(&(TypeId::of::<S>(), TypeId::of::<D>()))
    }
}

#[cfg(test)]
mod tests {
    use folio_macros::btree_map_into;

    use super::*;

    struct Source;
    struct Destination;

    fn get_mapping() -> PropertyMapping {
        PropertyMapping::new(btree_map_into! {
            "id" => vec![MappedField::new("id")],
            "Name" => vec![MappedField::new("first_name"), MappedField::new("last_name")],
            "age" => vec![MappedField::reverted("date_of_birth")],
        })
    }

    #[test]
    fn case_insensitive_lookup() {
        let mapping = get_mapping();
        assert!(mapping.contains("name"));
        assert!(mapping.contains("NAME"));
        let fields = mapping.get("nAmE").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "first_name");
        assert_eq!(fields[1].name, "last_name");
        assert!(mapping.get("unknown").is_none());
    }

    #[test]
    fn revert_flag() {
        let mapping = get_mapping();
        let fields = mapping.get("age").unwrap();
        assert!(fields[0].revert);
        assert!(!mapping.get("id").unwrap()[0].revert);
    }

    #[test]
    fn registry() {
        let mut registry = PropertyMappingRegistry::new();
        registry.register::<Source, Destination>(get_mapping());

        assert!(registry.contains::<Source, Destination>());
        assert!(registry.get::<Source, Destination>().is_ok());

        let err = registry.get::<Destination, Source>().unwrap_err();
        assert!(matches!(err, MappingError::NotFound { .. }));
        assert!(err.to_string().contains("Destination"));
    }
}
