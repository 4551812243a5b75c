pub mod entities {
    pub use folio_entities::{media::*, post::*, tag::*, time::*, visit::*};
}

pub mod gateways;
pub mod metadata;
pub mod repositories;
pub mod tag;
pub mod usecases;
