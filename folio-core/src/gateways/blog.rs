use folio_entities::post::Post;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The blog service is unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Read access to the posts published on the chain.
pub trait BlogGateway {
    /// All posts of the given author, newest first.
    fn posts_by_author(&self, author: &str) -> Result<Vec<Post>, Error>;
}
