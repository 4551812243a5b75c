pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::post_builder::*;

pub mod post_builder {

    use super::*;
    use crate::{post::*, time::Timestamp};

    #[derive(Debug)]
    pub struct PostBuild {
        post: Post,
    }

    impl PostBuild {
        pub fn permlink(mut self, permlink: &str) -> Self {
            self.post.permlink = permlink.into();
            self
        }
        pub fn author(mut self, author: &str) -> Self {
            self.post.author = author.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.post.title = title.into();
            self
        }
        pub fn body(mut self, body: &str) -> Self {
            self.post.body = Some(body.into());
            self
        }
        pub fn created(mut self, seconds: i64) -> Self {
            self.post.created = Timestamp::from_seconds(seconds);
            self
        }
        pub fn json_metadata(mut self, json_metadata: &str) -> Self {
            self.post.json_metadata = json_metadata.into();
            self
        }
        /// Replace the metadata blob by a JSON object with the given tags.
        pub fn tags(mut self, tags: &[&str]) -> Self {
            self.post.json_metadata = serde_json::json!({ "tags": tags }).to_string();
            self
        }
        pub fn finish(self) -> Post {
            self.post
        }
    }

    impl Builder for Post {
        type Build = PostBuild;
        fn build() -> PostBuild {
            PostBuild {
                post: Post {
                    permlink: "a-post".into(),
                    author: "photographer".into(),
                    title: "A post".into(),
                    body: None,
                    created: Timestamp::from_seconds(0),
                    json_metadata: "{}".into(),
                },
            }
        }
    }
}
