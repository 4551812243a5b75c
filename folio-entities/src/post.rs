use crate::time::Timestamp;

/// A blog post as published on the chain.
///
/// The `json_metadata` blob is owned by the publishing client
/// and is not guaranteed to be valid JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub permlink: String,
    pub author: String,
    pub title: String,
    pub body: Option<String>,
    pub created: Timestamp,
    pub json_metadata: String,
}

/// The parts of a post's metadata blob that could be read.
///
/// Missing or mistyped fields are represented by empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMetadata {
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

impl PostMetadata {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_tag() {
        let meta = PostMetadata {
            tags: vec!["street".into(), "bw".into()],
            images: vec![],
        };
        assert!(meta.has_tag("bw"));
        assert!(!meta.has_tag("BW"));
        assert!(!PostMetadata::default().has_tag("bw"));
    }
}
