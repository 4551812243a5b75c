use super::json_error_response;
use folio_core::{
    gateways::blog::Error as BlogError, repositories::Error as RepoError,
    usecases::Error as ParameterError,
};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        ParameterError::from(err).into()
    }
}

impl From<BlogError> for Error {
    fn from(err: BlogError) -> Self {
        ParameterError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => {
                let status = match err {
                    ParameterError::InvalidPage
                    | ParameterError::InvalidContentId
                    | ParameterError::InvalidGateway => Status::BadRequest,
                    ParameterError::PostNotFound | ParameterError::Repo(RepoError::NotFound) => {
                        Status::NotFound
                    }
                    ParameterError::Blog(BlogError::Unavailable(_)) => Status::BadGateway,
                    _ => {
                        log::error!("Error: {err}");
                        Status::InternalServerError
                    }
                };
                json_error_response(req, &err, status)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                log::error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
