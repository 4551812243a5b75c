use crate::{gateways::blog, repositories};
use folio_entities::media::{ContentIdParseError, GatewayParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid page name")]
    InvalidPage,
    #[error("The post does not exist")]
    PostNotFound,
    #[error("Invalid content identifier")]
    InvalidContentId,
    #[error("Invalid gateway URL")]
    InvalidGateway,
    #[error("No gateway available")]
    NoGateway,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Blog(#[from] blog::Error),
}

impl From<ContentIdParseError> for Error {
    fn from(_: ContentIdParseError) -> Self {
        Self::InvalidContentId
    }
}

impl From<GatewayParseError> for Error {
    fn from(_: GatewayParseError) -> Self {
        Self::InvalidGateway
    }
}
