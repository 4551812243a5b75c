// Low-level storage access traits.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait VisitCounterRepo {
    /// Current number of visits, `0` for unknown pages.
    fn visits(&self, page: &str) -> Result<u64>;

    /// Atomically adds one visit and returns the new number.
    fn increment_visits(&self, page: &str) -> Result<u64>;
}
