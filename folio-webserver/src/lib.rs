use std::sync::Arc;

use folio_core::{gateways::blog::BlogGateway, repositories::VisitCounterRepo};

mod web;

pub use web::Cfg;

pub async fn run(
    cfg: Cfg,
    enable_cors: bool,
    blog_gw: Arc<dyn BlogGateway + Send + Sync>,
    visit_counter: Box<dyn VisitCounterRepo + Send + Sync>,
    version: &'static str,
) {
    web::run(cfg, enable_cors, blog_gw, visit_counter, version).await;
}
