use super::*;

#[get("/posts?<tag>")]
pub async fn get_posts(
    cfg: &State<Cfg>,
    blog: &State<Blog>,
    tag: Option<String>,
) -> Result<Vec<json::PostSummary>> {
    let posts = load_posts(cfg, blog).await?.unwrap_or_default();
    let tag = tag.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let summaries = usecases::filter_posts(posts, tag)
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(summaries))
}

#[get("/posts/<permlink>")]
pub async fn get_post(
    cfg: &State<Cfg>,
    blog: &State<Blog>,
    permlink: &str,
) -> Result<json::PostSummary> {
    let posts = load_posts(cfg, blog).await?.unwrap_or_default();
    let post = usecases::find_post(posts, permlink)?;
    Ok(Json(post.into()))
}
