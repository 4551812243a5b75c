use super::prelude::*;
use crate::{metadata::post_metadata_or_default, tag::is_hidden};

/// Posts of the public grid, optionally restricted to a single tag.
pub fn filter_posts(posts: Vec<Post>, tag: Option<&str>) -> Vec<(Post, PostMetadata)> {
    posts
        .into_iter()
        .map(|post| {
            let metadata = post_metadata_or_default(&post);
            (post, metadata)
        })
        .filter(|(_, metadata)| !metadata.tags.iter().any(|t| is_hidden(t)))
        .filter(|(_, metadata)| tag.map_or(true, |tag| metadata.has_tag(tag)))
        .collect()
}

/// Hidden posts can still be found by their permlink.
pub fn find_post(posts: Vec<Post>, permlink: &str) -> Result<(Post, PostMetadata)> {
    let post = posts
        .into_iter()
        .find(|p| p.permlink == permlink)
        .ok_or(Error::PostNotFound)?;
    let metadata = post_metadata_or_default(&post);
    Ok((post, metadata))
}
