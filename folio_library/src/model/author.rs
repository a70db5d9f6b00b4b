use folio_common::id::Id;
use folio_macros::btree_map_into;
use folio_query::{
    mapping::{FieldMapped, MappedField, PropertyMapping},
    value::Value,
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::model::book::Book;

/// An author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Identifier, nil until assigned by the repository.
    #[serde(default)]
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub genre: String,
    pub date_of_birth: Date,
    #[serde(default)]
    pub books: Vec<Book>,
}

/// The client-facing projection of an author.
///
/// Its field names are the public sort keys accepted by author list
/// queries; [`Author::property_mapping`] translates them back to storage
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: Id,
    pub name: String,
    pub age: i32,
    pub genre: String,
}

impl Author {
    /// Mapping from [`AuthorSummary`] sort keys to stored author fields.
    ///
    /// `age` grows as the birth date shrinks, hence the reverted field.
    /// `name` is a composite of the stored name parts in display order.
    pub fn property_mapping() -> PropertyMapping {
        PropertyMapping::new(btree_map_into! {
            "id" => vec![MappedField::new("id")],
            "genre" => vec![MappedField::new("genre")],
            "age" => vec![MappedField::reverted("date_of_birth")],
            "name" => vec![MappedField::new("first_name"), MappedField::new("last_name")],
        })
    }
}

impl FieldMapped for Author {
    fn get_field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "first_name" => self.first_name.clone().into(),
            "last_name" => self.last_name.clone().into(),
            "genre" => self.genre.clone().into(),
            "date_of_birth" => self.date_of_birth.into(),
            _ => unimplemented!("FieldMapped: Author::{}", name),
        }
    }
}

impl AuthorSummary {
    /// Projects an author into its client-facing shape.
    ///
    /// `today` is supplied by the caller so age computation stays
    /// deterministic and testable.
    #[must_use]
    pub fn project(author: &Author, today: Date) -> Self {
        let born = author.date_of_birth;
        let mut age = today.year() - born.year();
        if (today.month() as u8, today.day()) < (born.month() as u8, born.day()) {
            age -= 1;
        }

        Self {
            id: author.id,
            name: format!("{} {}", author.first_name, author.last_name),
            age,
            genre: author.genre.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::testing::seed_authors;

    use super::*;

    #[test]
    fn mapping_covers_summary_keys() {
        let mapping = Author::property_mapping();
        for key in ["id", "name", "age", "genre"] {
            assert!(mapping.contains(key), "missing key `{key}`");
        }
        assert!(!mapping.contains("books"));
    }

    #[test]
    fn field_dispatch() {
        let author = seed_authors().remove(0);
        assert_eq!(author.get_field("first_name"), Value::from("Stephen"));
        assert_eq!(author.get_field("genre"), Value::from("Horror"));
        assert_eq!(
            author.get_field("date_of_birth"),
            Value::from(date!(1947 - 09 - 21))
        );
    }

    #[test]
    fn summary_age() {
        let author = seed_authors().remove(0);

        // Birthday already passed this year.
        let summary = AuthorSummary::project(&author, date!(2016 - 10 - 01));
        assert_eq!(summary.name, "Stephen King");
        assert_eq!(summary.age, 69);

        // Birthday still ahead this year.
        let summary = AuthorSummary::project(&author, date!(2016 - 09 - 20));
        assert_eq!(summary.age, 68);
    }

    #[test]
    fn serializes() {
        let author = seed_authors().remove(0);
        let value = serde_json::to_value(&author).unwrap();
        assert_eq!(value["first_name"], "Stephen");
        assert_eq!(value["date_of_birth"], "1947-09-21");
        assert_eq!(value["books"][0]["title"], "The Shining");
    }
}
