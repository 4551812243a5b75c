use std::{cell::RefCell, collections::HashMap};

use crate::{
    entities::*,
    gateways::blog::{self, BlogGateway},
    repositories::{Error as RepoError, VisitCounterRepo},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub visits: RefCell<HashMap<String, u64>>,
}

impl VisitCounterRepo for MockDb {
    fn visits(&self, page: &str) -> RepoResult<u64> {
        Ok(self.visits.borrow().get(page).copied().unwrap_or_default())
    }

    fn increment_visits(&self, page: &str) -> RepoResult<u64> {
        let mut visits = self.visits.borrow_mut();
        let count = visits.entry(page.to_owned()).or_default();
        *count += 1;
        Ok(*count)
    }
}

pub struct MockBlog {
    posts: Option<Vec<Post>>,
}

impl MockBlog {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts: Some(posts) }
    }

    pub fn unavailable() -> Self {
        Self { posts: None }
    }
}

impl BlogGateway for MockBlog {
    fn posts_by_author(&self, author: &str) -> Result<Vec<Post>, blog::Error> {
        match &self.posts {
            Some(posts) => Ok(posts
                .iter()
                .filter(|p| p.author == author)
                .cloned()
                .collect()),
            None => Err(blog::Error::Unavailable("mock".into())),
        }
    }
}
