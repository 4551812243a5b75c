use anyhow::{anyhow, Result};
use folio_core::{entities::Gateway, usecases};
use folio_entities::url::Url;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "folio.toml";

const ENV_NAME_HIVE_ACCOUNT: &str = "HIVE_ACCOUNT";
const ENV_NAME_HIVE_API_URL: &str = "HIVE_API_URL";
const ENV_NAME_MEDIA_ACCESS_TOKEN: &str = "MEDIA_ACCESS_TOKEN";

#[derive(Debug)]
pub struct Config {
    pub hive: Hive,
    pub media: Media,
    pub visits: Visits,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_with(|name| env::var(name).ok());
        Ok(cfg)
    }

    fn override_with<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(account) = var(ENV_NAME_HIVE_ACCOUNT) {
            self.hive.account = non_blank(account);
        }
        if let Some(api_url) = var(ENV_NAME_HIVE_API_URL) {
            self.hive.api_url = api_url;
        }
        if let Some(token) = var(ENV_NAME_MEDIA_ACCESS_TOKEN) {
            self.media.access_token = non_blank(token);
        }
    }
}

#[derive(Debug)]
pub struct Hive {
    pub api_url: String,
    /// Without an account no posts are published.
    pub account: Option<String>,
    /// Posts per JSON-RPC request.
    pub limit: u32,
    pub max_posts: usize,
}

#[derive(Debug)]
pub struct Media {
    /// Ordered by preference.
    pub gateways: Vec<Gateway>,
    pub access_token: Option<String>,
}

#[derive(Debug)]
pub struct Visits {
    pub file: PathBuf,
}

#[derive(Debug)]
pub struct WebServer {
    pub enable_cors: bool,
    pub site_url: Url,
    pub tags_cache_max_age: Duration,
}

fn non_blank(s: String) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            hive,
            media,
            visits,
            webserver,
        } = from;

        let raw::Hive {
            api_url,
            account,
            limit,
            max_posts,
        } = hive.unwrap_or_default();
        let hive = Hive {
            api_url,
            account: account.and_then(non_blank),
            limit,
            max_posts,
        };

        let raw::Media {
            gateways,
            access_token,
        } = media.unwrap_or_default();
        let gateways = match gateways {
            Some(urls) => urls
                .iter()
                .map(|url| {
                    url.parse::<Gateway>()
                        .map_err(|err| anyhow!("Invalid media gateway '{url}': {err}"))
                })
                .collect::<Result<Vec<_>>>()?,
            None => usecases::default_gateways(),
        };
        if gateways.is_empty() {
            return Err(anyhow!("No media gateways defined"));
        }
        if let Some(gateway) = usecases::duplicate_gateway(&gateways) {
            return Err(anyhow!(
                "Media gateway '{}' is defined more than once",
                gateway.base_url()
            ));
        }
        let media = Media {
            gateways,
            access_token: access_token.and_then(non_blank),
        };

        let raw::Visits { file } = visits.unwrap_or_default();
        let visits = Visits { file };

        let raw::WebServer {
            cors,
            site_url,
            tags_cache_max_age,
        } = webserver.unwrap_or_default();
        let site_url = site_url
            .parse()
            .map_err(|err| anyhow!("Invalid site URL '{site_url}': {err}"))?;
        let webserver = WebServer {
            enable_cors: cors,
            site_url,
            tags_cache_max_age,
        };

        Ok(Self {
            hive,
            media,
            visits,
            webserver,
        })
    }
}
