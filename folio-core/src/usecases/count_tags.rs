use std::collections::{HashMap, HashSet};

use super::prelude::*;
use crate::{metadata::parse_metadata, tag::HIDDEN_TAG};

/// Selects the posts and tags that are taken into account
/// when counting tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    /// Tags that are never counted.
    pub excluded: Vec<String>,
    /// If set, only posts with one of these permlinks are counted.
    pub subset: Option<HashSet<String>>,
}

impl TagFilter {
    /// The tags of the public site: everything except hidden posts' marker tag.
    pub fn public() -> Self {
        Self {
            excluded: vec![HIDDEN_TAG.to_owned()],
            subset: None,
        }
    }

    /// The tags of a single page of posts.
    pub fn page<I, S>(permlinks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: vec![],
            subset: Some(permlinks.into_iter().map(Into::into).collect()),
        }
    }

    fn includes_post(&self, post: &Post) -> bool {
        self.subset
            .as_ref()
            .map_or(true, |subset| subset.contains(&post.permlink))
    }

    fn counts_tag(&self, tag: &str) -> bool {
        !self.excluded.iter().any(|t| t == tag)
    }
}

/// Counts the number of posts per tag.
///
/// The result is ordered by descending count. Tags with the same count
/// keep the order in which they were first encountered.
/// Posts with malformed metadata are skipped.
pub fn count_tags<'a, I>(posts: I, filter: &TagFilter) -> Vec<TagFrequency>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut frequencies: Vec<TagFrequency> = vec![];
    let mut positions: HashMap<String, usize> = HashMap::new();
    for post in posts.into_iter().filter(|p| filter.includes_post(p)) {
        let metadata = match parse_metadata(&post.json_metadata) {
            Ok(metadata) => metadata,
            Err(err) => {
                log::warn!(
                    "Skipping post '{}' with malformed metadata: {err}",
                    post.permlink
                );
                continue;
            }
        };
        let mut seen = HashSet::new();
        for tag in &metadata.tags {
            if !filter.counts_tag(tag) || !seen.insert(tag.as_str()) {
                continue;
            }
            match positions.get(tag) {
                Some(&pos) => frequencies[pos].1 += 1,
                None => {
                    positions.insert(tag.clone(), frequencies.len());
                    frequencies.push(TagFrequency(tag.clone(), 1));
                }
            }
        }
    }
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies
}
