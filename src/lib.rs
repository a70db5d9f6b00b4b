//! # Folio
//!
//! Paged, sorted and filtered data access for a library domain.

pub mod common {
    pub use folio_common::*;
}

#[cfg(feature = "macros")]
pub mod macros {
    pub use folio_macros::*;
}

#[cfg(feature = "query")]
pub mod query {
    pub use folio_query::*;
}

#[cfg(feature = "library")]
pub mod library {
    pub use folio_library::*;
}
