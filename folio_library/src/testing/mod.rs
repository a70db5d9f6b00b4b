//! Seed data for tests and demos.

use folio_common::id::Id;
use time::macros::date;

use crate::model::{Author, Book};

/// The canonical three-author data set.
///
/// Ids are generated per call; link books to authors through the returned
/// records.
#[must_use]
pub fn seed_authors() -> Vec<Author> {
    let king_id = Id::generate();
    vec![
        Author {
            id: king_id,
            first_name: "Stephen".into(),
            last_name: "King".into(),
            genre: "Horror".into(),
            date_of_birth: date!(1947 - 09 - 21),
            books: vec![Book {
                id: Id::generate(),
                author_id: king_id,
                title: "The Shining".into(),
                description: "The Shining is a horror novel by American author Stephen King."
                    .into(),
            }],
        },
        Author {
            id: Id::generate(),
            first_name: "Neil".into(),
            last_name: "Gaiman".into(),
            genre: "Fantasy".into(),
            date_of_birth: date!(1960 - 11 - 10),
            books: Vec::new(),
        },
        Author {
            id: Id::generate(),
            first_name: "Tom".into(),
            last_name: "Lanoye".into(),
            genre: "Various".into(),
            date_of_birth: date!(1958 - 08 - 27),
            books: Vec::new(),
        },
    ]
}
