use super::*;

pub mod prelude {

    use crate::web::{self, api};
    use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

    pub use crate::web::{
        tests::prelude::{LocalResponse as Response, *},
        Cfg,
    };

    pub fn setup(posts: Vec<Post>) -> TestEnv {
        setup_with_cfg(default_cfg(), Some(posts))
    }

    pub fn setup_with_cfg(cfg: Cfg, posts: Option<Vec<Post>>) -> TestEnv {
        web::tests::rocket_test_setup(vec![("/", api::routes())], cfg, posts)
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn post(permlink: &str, tags: &[&str]) -> Post {
        Post::build()
            .permlink(permlink)
            .author("photographer")
            .title(permlink)
            .tags(tags)
            .finish()
    }

    pub fn url_encode(s: &str) -> String {
        utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
    }
}

use self::prelude::*;

fn tag(tag: &str, count: u64) -> json::TagFrequency {
    json::TagFrequency {
        tag: tag.into(),
        count,
    }
}

fn tags_of(res: Response) -> Vec<json::TagFrequency> {
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

mod tags {
    use super::*;

    #[test]
    fn count_most_popular_tags() {
        let env = setup(vec![
            Post::build()
                .permlink("p1")
                .author("photographer")
                .json_metadata(r#"{"tags":["a","b","a"]}"#)
                .finish(),
            Post::build()
                .permlink("p2")
                .author("photographer")
                .json_metadata(r#"{"tags":["a"]}"#)
                .finish(),
            Post::build()
                .permlink("p3")
                .author("photographer")
                .json_metadata("not valid json")
                .finish(),
            Post::build()
                .permlink("p4")
                .author("photographer")
                .json_metadata(r#"{"tags":"not-an-array"}"#)
                .finish(),
        ]);
        let res = env.client.get("/tags").dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        assert_eq!(tags_of(res), vec![tag("a", 2), tag("b", 1)]);
    }

    #[test]
    fn exclude_hidden_tag() {
        let env = setup(vec![post("p1", &["hidden", "a"]), post("p2", &["a"])]);
        let res = env.client.get("/tags").dispatch();
        assert_eq!(tags_of(res), vec![tag("a", 2)]);
    }

    #[test]
    fn ignore_posts_of_other_authors() {
        let env = setup(vec![
            post("p1", &["a"]),
            Post::build()
                .permlink("p2")
                .author("someone-else")
                .tags(&["b"])
                .finish(),
        ]);
        let res = env.client.get("/tags").dispatch();
        assert_eq!(tags_of(res), vec![tag("a", 1)]);
    }

    #[test]
    fn count_tags_of_page() {
        let env = setup(vec![
            post("p1", &["a", "hidden"]),
            post("p2", &["b"]),
            post("p3", &["a", "c"]),
        ]);
        let res = env.client.get("/tags?permlinks=p1,p3").dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(tags_of(res), vec![tag("a", 2), tag("hidden", 1), tag("c", 1)]);
    }

    #[test]
    fn empty_list_without_account() {
        let cfg = Cfg {
            blog_account: None,
            ..default_cfg()
        };
        let env = setup_with_cfg(cfg, Some(vec![post("p1", &["a"])]));
        let res = env.client.get("/tags").dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(res.into_string().unwrap(), "[]");
        assert_eq!(env.blog.requests(), 0);
    }

    #[test]
    fn empty_list_with_error_status_on_failure() {
        let env = setup_with_cfg(default_cfg(), None);
        let res = env.client.get("/tags").dispatch();
        assert_eq!(res.status(), Status::InternalServerError);
        test_json(&res);
        assert_eq!(res.into_string().unwrap(), "[]");
    }

    #[test]
    fn cache_public_tags() {
        let env = setup(vec![post("p1", &["a"])]);
        let res = env.client.get("/tags").dispatch();
        assert_eq!(tags_of(res), vec![tag("a", 1)]);
        env.blog.set_posts(Some(vec![post("p1", &["b"])]));
        let res = env.client.get("/tags").dispatch();
        assert_eq!(tags_of(res), vec![tag("a", 1)]);
        assert_eq!(env.blog.requests(), 1);
    }

    #[test]
    fn do_not_cache_page_tags() {
        let env = setup(vec![post("p1", &["a"])]);
        env.client.get("/tags?permlinks=p1").dispatch();
        env.blog.set_posts(Some(vec![post("p1", &["b"])]));
        let res = env.client.get("/tags?permlinks=p1").dispatch();
        assert_eq!(tags_of(res), vec![tag("b", 1)]);
        assert_eq!(env.blog.requests(), 2);
    }

    #[test]
    fn refresh_expired_cache() {
        let cfg = Cfg {
            tags_cache_max_age: std::time::Duration::ZERO,
            ..default_cfg()
        };
        let env = setup_with_cfg(cfg, Some(vec![post("p1", &["a"])]));
        env.client.get("/tags").dispatch();
        env.blog.set_posts(Some(vec![post("p1", &["b"])]));
        let res = env.client.get("/tags").dispatch();
        assert_eq!(tags_of(res), vec![tag("b", 1)]);
    }
}

mod posts {
    use super::*;

    fn permlinks(res: Response) -> Vec<String> {
        let posts: Vec<json::PostSummary> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        posts.into_iter().map(|p| p.permlink).collect()
    }

    #[test]
    fn list_public_posts() {
        let env = setup(vec![
            post("sea", &["beach"]),
            post("draft", &["beach", "hidden"]),
            post("city", &["street"]),
        ]);
        let res = env.client.get("/posts").dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        assert_eq!(permlinks(res), vec!["sea", "city"]);
    }

    #[test]
    fn filter_posts_by_tag() {
        let env = setup(vec![
            post("sea", &["beach"]),
            post("draft", &["beach", "hidden"]),
            post("city", &["street"]),
        ]);
        let res = env.client.get("/posts?tag=beach").dispatch();
        assert_eq!(permlinks(res), vec!["sea"]);
    }

    #[test]
    fn no_posts_without_account() {
        let cfg = Cfg {
            blog_account: None,
            ..default_cfg()
        };
        let env = setup_with_cfg(cfg, Some(vec![post("sea", &[])]));
        let res = env.client.get("/posts").dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(permlinks(res).is_empty());
    }

    #[test]
    fn bad_gateway_if_blog_is_unavailable() {
        let env = setup_with_cfg(default_cfg(), None);
        let res = env.client.get("/posts").dispatch();
        assert_eq!(res.status(), Status::BadGateway);
        test_json(&res);
    }

    #[test]
    fn get_single_post() {
        let env = setup(vec![Post::build()
            .permlink("sea")
            .author("photographer")
            .title("By the sea")
            .created(1_000)
            .json_metadata(r#"{"tags":["beach"],"image":["https://img.example/sea.jpg"]}"#)
            .finish()]);
        let res = env.client.get("/posts/sea").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let post: json::PostSummary = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(
            post,
            json::PostSummary {
                permlink: "sea".into(),
                author: "photographer".into(),
                title: "By the sea".into(),
                created: 1_000,
                tags: vec!["beach".into()],
                image: Some("https://img.example/sea.jpg".into()),
            }
        );
    }

    #[test]
    fn post_not_found() {
        let env = setup(vec![post("sea", &[])]);
        let res = env.client.get("/posts/city").dispatch();
        assert_eq!(res.status(), Status::NotFound);
        test_json(&res);
        let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(err.http_status, 404);
    }
}

mod media {
    use super::*;

    fn source_of(res: Response) -> Option<json::MediaSource> {
        serde_json::from_str(&res.into_string().unwrap()).unwrap()
    }

    #[test]
    fn resolve_image_on_first_gateway() {
        let env = setup(vec![]);
        let res = env.client.get("/media?cid=QmAbc").dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        assert_eq!(
            source_of(res),
            Some(json::MediaSource {
                url: "https://ipfs.io/ipfs/QmAbc".into(),
                kind: json::MediaKind::Image,
                gateway_index: 0,
            })
        );
    }

    #[test]
    fn resolve_video() {
        let env = setup(vec![]);
        let res = env.client.get("/media?cid=QmAbc%2Fclip.mp4").dispatch();
        let source = source_of(res).unwrap();
        assert_eq!(source.kind, json::MediaKind::Video);
        assert_eq!(source.url, "https://ipfs.io/ipfs/QmAbc/clip.mp4");
    }

    #[test]
    fn append_configured_access_token() {
        let cfg = Cfg {
            media_access_token: Some("s3cr3t".into()),
            ..default_cfg()
        };
        let env = setup_with_cfg(cfg, Some(vec![]));
        let res = env.client.get("/media?cid=QmAbc").dispatch();
        assert_eq!(
            source_of(res).unwrap().url,
            "https://ipfs.io/ipfs/QmAbc?pinataGatewayToken=s3cr3t"
        );
    }

    #[test]
    fn reject_invalid_content_id() {
        let env = setup(vec![]);
        let res = env.client.get("/media?cid=").dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        test_json(&res);
    }

    #[test]
    fn fall_back_to_next_gateways() {
        let env = setup(vec![]);
        let mut url = source_of(env.client.get("/media?cid=QmAbc").dispatch())
            .unwrap()
            .url;
        let mut visited = vec![url.clone()];
        loop {
            let res = env
                .client
                .get(format!(
                    "/media/fallback?cid=QmAbc&failed={}",
                    url_encode(&url)
                ))
                .dispatch();
            assert_eq!(res.status(), Status::Ok);
            match source_of(res) {
                Some(source) => {
                    url = source.url;
                    visited.push(url.clone());
                }
                None => break,
            }
        }
        assert_eq!(
            visited,
            vec![
                "https://ipfs.io/ipfs/QmAbc",
                "https://cloudflare-ipfs.com/ipfs/QmAbc",
                "https://gateway.pinata.cloud/ipfs/QmAbc",
            ]
        );
    }

    #[test]
    fn fall_back_with_encoded_access_token() {
        let cfg = Cfg {
            media_access_token: Some("a+b%c#d".into()),
            ..default_cfg()
        };
        let env = setup_with_cfg(cfg, Some(vec![]));
        let first = source_of(env.client.get("/media?cid=QmAbc").dispatch()).unwrap();
        assert_eq!(
            first.url,
            "https://ipfs.io/ipfs/QmAbc?pinataGatewayToken=a%2Bb%25c%23d"
        );
        let res = env
            .client
            .get(format!(
                "/media/fallback?cid=QmAbc&failed={}",
                url_encode(&first.url)
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let second = source_of(res).unwrap();
        assert_eq!(second.gateway_index, 1);
        assert_eq!(
            second.url,
            "https://cloudflare-ipfs.com/ipfs/QmAbc?pinataGatewayToken=a%2Bb%25c%23d"
        );
    }

    #[test]
    fn reject_gateways_with_same_origin() {
        let cfg = Cfg {
            gateways: vec![
                "https://g1.example".parse().unwrap(),
                "https://g1.example/".parse().unwrap(),
            ],
            ..default_cfg()
        };
        let env = setup_with_cfg(cfg, Some(vec![]));
        let res = env
            .client
            .get("/media/fallback?cid=QmAbc&failed=https%3A%2F%2Fg1.example%2Fipfs%2FQmAbc")
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        test_json(&res);
    }

    #[test]
    fn reject_invalid_failed_url() {
        let env = setup(vec![]);
        let res = env
            .client
            .get("/media/fallback?cid=QmAbc&failed=not-a-url")
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }
}

mod visits {
    use super::*;

    fn count_of(res: Response) -> u64 {
        let count: json::VisitCount = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        count.count
    }

    #[test]
    fn count_visits() {
        let env = setup(vec![]);
        assert_eq!(count_of(env.client.get("/visits/home").dispatch()), 0);
        let res = env.client.post("/visits/home").dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        assert_eq!(count_of(res), 1);
        assert_eq!(count_of(env.client.post("/visits/home").dispatch()), 2);
        assert_eq!(count_of(env.client.get("/visits/home").dispatch()), 2);
        assert_eq!(count_of(env.client.get("/visits/about").dispatch()), 0);
    }

    #[test]
    fn count_visits_of_nested_pages() {
        let env = setup(vec![]);
        env.client.post("/visits/p/sea").dispatch();
        let res = env.client.get("/visits/p/sea").dispatch();
        let count: json::VisitCount = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(
            count,
            json::VisitCount {
                page: "p/sea".into(),
                count: 1
            }
        );
    }

    #[test]
    fn reject_invalid_page_name() {
        let env = setup(vec![]);
        let res = env.client.post("/visits/a%20b").dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        test_json(&res);
    }
}

#[test]
fn get_version() {
    let env = setup(vec![]);
    let res = env.client.get("/server/version").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap(), DUMMY_VERSION);
}
