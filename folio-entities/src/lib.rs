#![deny(missing_debug_implementations)]

//! # folio-entities
//!
//! Reusable, agnostic domain entities of the folio photo blog.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod media;
pub mod post;
pub mod tag;
pub mod time;
pub mod visit;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
