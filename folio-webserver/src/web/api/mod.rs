use std::{fmt::Display, result};

use anyhow::anyhow;
use folio_boundary::{self as json, Error as JsonErrorResponse};
use folio_core::{entities::Post, usecases};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Route, State,
};

use super::{guards::*, Cfg, PopularTagsCache};

mod error;
mod media;
mod posts;
mod tags;
mod util;
mod visits;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   tags   --- //
        tags::get_tags,
        // ---   posts   --- //
        posts::get_posts,
        posts::get_post,
        // ---   media   --- //
        media::get_media,
        media::get_media_fallback,
        // ---   visits   --- //
        visits::get_visits,
        visits::post_visit,
        // ---   server   --- //
        util::get_version,
    ]
}

/// Loads the posts of the configured account.
///
/// Returns `None` if no account is configured.
pub(crate) async fn load_posts(
    cfg: &Cfg,
    blog: &Blog,
) -> result::Result<Option<Vec<Post>>, ApiError> {
    let Some(account) = cfg.blog_account.clone() else {
        return Ok(None);
    };
    let blog = blog.shared();
    let posts = rocket::tokio::task::spawn_blocking(move || usecases::load_posts(&*blog, &account))
        .await
        .map_err(|err| anyhow!("Loading posts failed: {err}"))??;
    Ok(Some(posts))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
