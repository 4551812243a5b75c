use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("folio.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub hive: Option<Hive>,
    pub media: Option<Media>,
    pub visits: Option<Visits>,
    pub webserver: Option<WebServer>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Hive {
    pub api_url: String,
    pub account: Option<String>,
    pub limit: u32,
    pub max_posts: usize,
}

impl Default for Hive {
    fn default() -> Self {
        Config::default().hive.expect("Hive configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Media {
    pub gateways: Option<Vec<String>>,
    pub access_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Visits {
    pub file: PathBuf,
}

impl Default for Visits {
    fn default() -> Self {
        Config::default().visits.expect("Visits configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
    pub site_url: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub tags_cache_max_age: Duration,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}
