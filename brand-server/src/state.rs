//! Shared application state

use std::sync::Arc;

use brand_core::BrandResolver;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<BrandResolver>,
}

impl AppState {
    pub fn new(resolver: Arc<BrandResolver>) -> Self {
        Self { resolver }
    }
}
