use std::{collections::HashMap, time::Duration};

use folio_boundary::TagFrequency;
use parking_lot::RwLock;
use time::OffsetDateTime;

type Cache = HashMap<String, (OffsetDateTime, Vec<TagFrequency>)>;

/// The public tags per blog account.
pub struct PopularTagsCache(RwLock<Cache>);

impl PopularTagsCache {
    pub fn new() -> Self {
        Self(RwLock::new(HashMap::new()))
    }

    pub fn most_popular_tags(&self, account: &str, max_cache_age: Duration) -> Option<Vec<TagFrequency>> {
        let (created_at, data) = self.0.read().get(account).cloned()?;
        let age_in_seconds = (OffsetDateTime::now_utc() - created_at).whole_seconds();
        if age_in_seconds < max_cache_age.as_secs() as i64 {
            Some(data)
        } else {
            None
        }
    }

    pub fn update(&self, account: &str, tags: Vec<TagFrequency>) {
        self.0
            .write()
            .insert(account.to_owned(), (OffsetDateTime::now_utc(), tags));
    }
}
