use std::sync::Arc;

use folio_core::{gateways::blog::BlogGateway, repositories::VisitCounterRepo};

pub struct Blog(pub Arc<dyn BlogGateway + Send + Sync>);

impl Blog {
    /// A handle that can be moved into a blocking task.
    pub fn shared(&self) -> Arc<dyn BlogGateway + Send + Sync> {
        Arc::clone(&self.0)
    }
}

pub struct Visits(pub Box<dyn VisitCounterRepo + Send + Sync>);

pub struct Version(pub &'static str);
