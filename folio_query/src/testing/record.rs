use folio_common::id::Id;
use folio_macros::btree_map_into;
use time::{Date, Month};

use crate::mapping::{FieldMapped, MappedField, PropertyMapping};
use crate::value::Value;

/// Fixture record for query tests.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberItem {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub joined: Date,
}

impl MemberItem {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, year: i32) -> Self {
        Self {
            id: Id::generate(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            joined: Date::from_calendar_date(year, Month::January, 1).unwrap(),
        }
    }

    pub fn property_mapping() -> PropertyMapping {
        PropertyMapping::new(btree_map_into! {
            "id" => vec![MappedField::new("id")],
            "name" => vec![MappedField::new("first_name"), MappedField::new("last_name")],
            "seniority" => vec![MappedField::reverted("joined")],
        })
    }
}

impl FieldMapped for MemberItem {
    fn get_field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "first_name" => self.first_name.clone().into(),
            "last_name" => self.last_name.clone().into(),
            "joined" => self.joined.into(),
            _ => unimplemented!("FieldMapped: MemberItem::{}", name),
        }
    }
}
