use folio_core::usecases::{self, SitemapEntry};
use maud::{html, Markup, PreEscaped};
use rocket::{get, http::ContentType, routes, Route, State};

use super::{api::load_posts, guards::Blog, Cfg};

pub fn routes() -> Vec<Route> {
    routes![get_robots_txt, get_sitemap_xml]
}

#[get("/robots.txt")]
pub fn get_robots_txt(cfg: &State<Cfg>) -> (ContentType, String) {
    (ContentType::Plain, robots_txt(cfg))
}

/// Lists the static pages and all public posts.
///
/// If the posts cannot be loaded only the static pages are listed.
#[get("/sitemap.xml")]
pub async fn get_sitemap_xml(cfg: &State<Cfg>, blog: &State<Blog>) -> (ContentType, String) {
    let posts = match load_posts(cfg, blog).await {
        Ok(posts) => posts.unwrap_or_default(),
        Err(err) => {
            log::warn!("Sitemap without posts: {err}");
            vec![]
        }
    };
    let entries = usecases::sitemap_entries(&cfg.site_url, &posts);
    (ContentType::XML, sitemap_xml(&entries))
}

fn robots_txt(cfg: &Cfg) -> String {
    let base = cfg.site_url.as_str().trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nSitemap: {base}/sitemap.xml\n")
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let markup: Markup = html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NAMESPACE) {
            @for entry in entries {
                url {
                    loc { (entry.loc) }
                    @if let Some(lastmod) = entry.lastmod {
                        lastmod { (lastmod.format_date()) }
                    }
                }
            }
        }
    };
    markup.into_string()
}
