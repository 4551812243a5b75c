//! Tolerant reading of the metadata blob attached to posts.

use folio_entities::post::{Post, PostMetadata};
use serde_json::Value;

pub fn parse_metadata(json_metadata: &str) -> Result<PostMetadata, serde_json::Error> {
    let value: Value = serde_json::from_str(json_metadata)?;
    Ok(PostMetadata {
        tags: string_list(&value, "tags"),
        images: string_list(&value, "image"),
    })
}

/// Like [`parse_metadata`] but treats malformed metadata as empty.
pub fn post_metadata_or_default(post: &Post) -> PostMetadata {
    parse_metadata(&post.json_metadata).unwrap_or_else(|err| {
        log::debug!(
            "Ignoring malformed metadata of post '{}': {err}",
            post.permlink
        );
        PostMetadata::default()
    })
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_tags_and_images() {
        let meta =
            parse_metadata(r#"{"tags":["a","b"],"image":["https://x/1.jpg"],"app":"x"}"#).unwrap();
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(meta.images, vec!["https://x/1.jpg"]);
    }

    #[test]
    fn reject_invalid_json() {
        assert!(parse_metadata("not valid json").is_err());
        assert!(parse_metadata("").is_err());
    }

    #[test]
    fn ignore_mistyped_fields() {
        let meta = parse_metadata(r#"{"tags":"not-an-array","image":42}"#).unwrap();
        assert!(meta.tags.is_empty());
        assert!(meta.images.is_empty());
    }

    #[test]
    fn ignore_non_string_tags() {
        let meta = parse_metadata(r#"{"tags":["a",1,null,{"b":2},"c"]}"#).unwrap();
        assert_eq!(meta.tags, vec!["a", "c"]);
    }

    #[test]
    fn accept_non_object_json() {
        assert_eq!(parse_metadata("[1,2]").unwrap(), PostMetadata::default());
        assert_eq!(parse_metadata(r#""tags""#).unwrap(), PostMetadata::default());
        assert_eq!(parse_metadata("null").unwrap(), PostMetadata::default());
    }
}
