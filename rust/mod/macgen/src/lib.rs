pub mod alloc;
pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;
use macgen_core::Module;

use service::MacGenService;

/// MAC generator module: work orders, MAC-ID range allocation and
/// per-device identifier expansion.
pub struct MacGenModule {
    service: Arc<MacGenService>,
}

impl MacGenModule {
    pub fn new(service: MacGenService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for MacGenModule {
    fn name(&self) -> &str {
        "macgen"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
