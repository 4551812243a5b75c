use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use folio_gateways::{hive::Hive, visit_counter::JsonFileVisitCounter};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "folio", version, about, long_about = None, rename_all = "kebab-case")]
struct Cli {
    /// Configuration file (TOML).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Allow requests from any origin.
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;

    let config::Hive {
        api_url,
        account,
        limit,
        max_posts,
    } = cfg.hive;
    log::info!("Using Hive API at {api_url}");
    let blog = Hive::new(api_url, limit, max_posts);

    let visits = JsonFileVisitCounter::try_new(&cfg.visits.file)?;

    let web_cfg = folio_webserver::Cfg {
        blog_account: account,
        site_url: cfg.webserver.site_url,
        gateways: cfg.media.gateways,
        media_access_token: cfg.media.access_token,
        tags_cache_max_age: cfg.webserver.tags_cache_max_age,
    };
    let enable_cors = cli.enable_cors || cfg.webserver.enable_cors;
    folio_webserver::run(
        web_cfg,
        enable_cors,
        Arc::new(blog),
        Box::new(visits),
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
