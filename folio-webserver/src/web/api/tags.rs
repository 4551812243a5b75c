use super::*;
use folio_core::usecases::TagFilter;

type TagsResponse = (Status, Json<Vec<json::TagFrequency>>);

/// Most popular tags of the blog.
///
/// With `permlinks` only the listed posts are taken into account
/// and no tags are excluded.
/// This endpoint never fails with an error body: a missing account
/// yields an empty list, any other failure an empty list with status 500.
#[get("/tags?<permlinks>")]
pub async fn get_tags(
    cfg: &State<Cfg>,
    blog: &State<Blog>,
    tags_cache: &State<PopularTagsCache>,
    permlinks: Option<String>,
) -> TagsResponse {
    let Some(account) = cfg.blog_account.as_deref() else {
        log::debug!("No blog account configured: no tags available");
        return (Status::Ok, Json(vec![]));
    };
    let filter = match permlinks {
        Some(permlinks) => TagFilter::page(util::split_ids(&permlinks)),
        None => {
            if let Some(tags) = tags_cache.most_popular_tags(account, cfg.tags_cache_max_age) {
                return (Status::Ok, Json(tags));
            }
            TagFilter::public()
        }
    };
    let posts = match load_posts(cfg, blog).await {
        Ok(posts) => posts.unwrap_or_default(),
        Err(err) => {
            log::error!("Unable to count tags: {err}");
            return (Status::InternalServerError, Json(vec![]));
        }
    };
    let tags: Vec<json::TagFrequency> = usecases::count_tags(&posts, &filter)
        .into_iter()
        .map(Into::into)
        .collect();
    if filter == TagFilter::public() {
        tags_cache.update(account, tags.clone());
    }
    (Status::Ok, Json(tags))
}
