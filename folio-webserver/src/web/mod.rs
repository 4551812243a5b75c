use std::{sync::Arc, time::Duration};

use folio_core::{
    entities::Gateway,
    gateways::blog::BlogGateway,
    repositories::VisitCounterRepo,
};
use folio_entities::url::Url;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
mod popular_tags_cache;
mod site;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// The account whose posts are published.
    /// Without an account all listings are empty.
    pub blog_account: Option<String>,
    pub site_url: Url,
    /// Ordered by preference.
    pub gateways: Vec<Gateway>,
    pub media_access_token: Option<String>,
    pub tags_cache_max_age: Duration,
}

use popular_tags_cache::PopularTagsCache;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    blog: Arc<dyn BlogGateway + Send + Sync>,
}

pub(crate) struct Connections {
    visits: Box<dyn VisitCounterRepo + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Connections { visits } = connections;
    let Gateways { blog } = gateways;

    match &cfg.blog_account {
        Some(account) => log::info!("Publishing posts of '{account}'"),
        None => log::warn!("No blog account configured: all listings will be empty"),
    }
    let tags_cache = PopularTagsCache::new();

    log::info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let blog = guards::Blog(blog);
    let visits = guards::Visits(visits);
    let version = guards::Version(version);

    let mut instance = r
        .manage(blog)
        .manage(visits)
        .manage(tags_cache)
        .manage(cfg)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", site::routes())]
}

pub async fn run(
    cfg: Cfg,
    enable_cors: bool,
    blog: Arc<dyn BlogGateway + Send + Sync>,
    visits: Box<dyn VisitCounterRepo + Send + Sync>,
    version: &'static str,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };
    let connections = Connections { visits };
    let gateways = Gateways { blog };

    let instance = rocket_instance(options, connections, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
