use super::prelude::*;

pub fn load_posts<G>(gateway: &G, author: &str) -> Result<Vec<Post>>
where
    G: BlogGateway + ?Sized,
{
    let posts = gateway.posts_by_author(author)?;
    log::debug!("Loaded {} posts of '{author}'", posts.len());
    Ok(posts)
}
