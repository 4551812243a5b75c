use super::prelude::*;
use crate::{metadata::post_metadata_or_default, tag::is_hidden};
use folio_entities::url::Url;

pub const STATIC_PAGES: [&str; 2] = ["", "about"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<Timestamp>,
}

pub fn post_path(permlink: &str) -> String {
    format!("p/{permlink}")
}

/// All public pages of the site, static pages first.
pub fn sitemap_entries(site_url: &Url, posts: &[Post]) -> Vec<SitemapEntry> {
    let base = site_url.as_str().trim_end_matches('/');
    let static_pages = STATIC_PAGES.iter().map(|page| SitemapEntry {
        loc: format!("{base}/{page}"),
        lastmod: None,
    });
    let post_pages = posts
        .iter()
        .filter(|post| {
            !post_metadata_or_default(post)
                .tags
                .iter()
                .any(|t| is_hidden(t))
        })
        .map(|post| SitemapEntry {
            loc: format!("{base}/{}", post_path(&post.permlink)),
            lastmod: Some(post.created),
        });
    static_pages.chain(post_pages).collect()
}
