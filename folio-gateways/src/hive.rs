use anyhow::anyhow;
use folio_core::gateways::blog::{self, BlogGateway};
use folio_entities::{post::Post, time::Timestamp};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use time::{macros::format_description, PrimitiveDateTime};

pub const DEFAULT_API_URL: &str = "https://api.hive.blog";

/// The condenser API refuses larger pages.
pub const MAX_PAGE_SIZE: u32 = 20;

const MIN_PAGE_SIZE: u32 = 2;

const GET_DISCUSSIONS_BY_BLOG: &str = "condenser_api.get_discussions_by_blog";

/// A blog gateway based on the JSON-RPC API of a Hive node.
#[derive(Debug, Clone)]
pub struct Hive {
    api_url: String,
    page_size: u32,
    max_posts: usize,
}

impl Hive {
    pub fn new(api_url: String, page_size: u32, max_posts: usize) -> Self {
        // Continued pages repeat their first entry.
        let page_size = page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        Self {
            api_url,
            page_size,
            max_posts,
        }
    }

    fn call<P, T>(
        &self,
        client: &reqwest::blocking::Client,
        method: &str,
        params: P,
    ) -> Result<T, blog::Error>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        };
        let response = client
            .post(&self.api_url)
            .json(&request)
            .send()
            .map_err(|err| blog::Error::Unavailable(err.to_string()))?;
        if !response.status().is_success() {
            return Err(blog::Error::Unavailable(format!(
                "Unexpected response status {}",
                response.status()
            )));
        }
        let response: RpcResponse<T> = response.json().map_err(|err| anyhow!(err))?;
        response.into_result()
    }
}

impl BlogGateway for Hive {
    fn posts_by_author(&self, author: &str) -> Result<Vec<Post>, blog::Error> {
        let client = reqwest::blocking::Client::new();
        let posts = fetch_all_pages(author, self.page_size, self.max_posts, |start| {
            let query = BlogQuery {
                tag: author,
                limit: self.page_size,
                start_author: start.map(|(a, _)| a.as_str()),
                start_permlink: start.map(|(_, p)| p.as_str()),
            };
            self.call(&client, GET_DISCUSSIONS_BY_BLOG, [query])
        })?;
        log::debug!("Fetched {} posts of '{author}' from {}", posts.len(), self.api_url);
        Ok(posts)
    }
}

/// Author and permlink of a feed entry.
type FeedKey = (String, String);

/// Walks through the blog feed page by page.
///
/// `fetch_page` loads the page starting at the given entry,
/// or the first page if there is none.
fn fetch_all_pages<F>(
    author: &str,
    page_size: u32,
    max_posts: usize,
    mut fetch_page: F,
) -> Result<Vec<Post>, blog::Error>
where
    F: FnMut(Option<&FeedKey>) -> Result<Vec<Discussion>, blog::Error>,
{
    let mut posts = vec![];
    let mut start: Option<FeedKey> = None;
    loop {
        let page = fetch_page(start.as_ref())?;
        let full_page = page.len() >= page_size as usize;
        let (page_posts, last) = collect_page(author, page, start.as_ref());
        posts.extend(page_posts);
        if !full_page || posts.len() >= max_posts {
            break;
        }
        match last {
            Some(last) if start.as_ref() != Some(&last) => start = Some(last),
            _ => break,
        }
    }
    posts.truncate(max_posts);
    Ok(posts)
}

/// Extracts the posts written by `author` from a page of the blog feed
/// and returns the key of the last entry to continue from.
///
/// A continued page starts with the entry it was requested from,
/// unless that entry has been removed in the meantime.
fn collect_page(
    author: &str,
    page: Vec<Discussion>,
    start: Option<&FeedKey>,
) -> (Vec<Post>, Option<FeedKey>) {
    let repeats_start = match (start, page.first()) {
        (Some((start_author, start_permlink)), Some(first)) => {
            let repeated = first.author == *start_author && first.permlink == *start_permlink;
            if !repeated {
                log::debug!("Feed entry {start_author}/{start_permlink} is gone");
            }
            repeated
        }
        _ => false,
    };
    let skip = usize::from(repeats_start);
    let last = page
        .iter()
        .skip(skip)
        .last()
        .map(|d| (d.author.clone(), d.permlink.clone()));
    let posts = page
        .into_iter()
        .skip(skip)
        // Reblogs of other authors are part of the feed
        .filter(|d| d.author == author)
        .map(Post::from)
        .collect();
    (posts, last)
}

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    method: &'a str,
    params: P,
    id: u32,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

impl<T> RpcResponse<T> {
    fn into_result(self) -> Result<T, blog::Error> {
        match (self.result, self.error) {
            (_, Some(err)) => Err(anyhow!(err).into()),
            (Some(result), None) => Ok(result),
            (None, None) => Err(anyhow!("Empty JSON-RPC response").into()),
        }
    }
}

#[derive(Debug, Deserialize, thiserror::Error)]
#[error("JSON-RPC error {code}: {message}")]
struct RpcError {
    #[serde(default)]
    code: i64,
    message: String,
}

#[derive(Serialize)]
struct BlogQuery<'a> {
    tag: &'a str,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_permlink: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct Discussion {
    author: String,
    permlink: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: Option<String>,
    created: String,
    #[serde(default)]
    json_metadata: String,
}

fn parse_created(created: &str) -> Option<Timestamp> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(created, &format)
        .ok()
        .map(|dt| dt.assume_utc().into())
}

impl From<Discussion> for Post {
    fn from(from: Discussion) -> Self {
        let Discussion {
            author,
            permlink,
            title,
            body,
            created,
            json_metadata,
        } = from;
        let created = parse_created(&created).unwrap_or_else(|| {
            log::warn!("Invalid creation time of post '{permlink}': {created}");
            Timestamp::from_seconds(0)
        });
        Self {
            permlink,
            author,
            title,
            body,
            created,
            json_metadata,
        }
    }
}
