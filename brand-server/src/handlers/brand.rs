//! GET /api/brand: diagnostic view of how this request was resolved.
//! GET /api/brands: registered brands.

use axum::extract::State;
use axum::{Extension, Json};
use brand_core::{BrandKey, BrandResolution, ResolutionMiss, ResolutionSource, RuntimeMode};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BrandDiagnostics {
    pub key: BrandKey,
    pub name: String,
    pub display_name: String,
    pub domain: String,
    pub channel_token: String,
    pub source: ResolutionSource,
    pub resolved_at: DateTime<Utc>,
    /// Whether `BRAND_KEY` pins every request.
    pub fixed: bool,
    pub runtime_mode: RuntimeMode,
    pub misses: Vec<ResolutionMiss>,
}

pub async fn current_brand(
    State(state): State<AppState>,
    Extension(resolution): Extension<BrandResolution>,
) -> Json<BrandDiagnostics> {
    let brand = &resolution.brand;
    Json(BrandDiagnostics {
        key: brand.key,
        name: brand.name.clone(),
        display_name: brand.display_name.clone(),
        domain: brand.domain.clone(),
        channel_token: brand.channel_token.clone(),
        source: resolution.source,
        resolved_at: resolution.resolved_at,
        fixed: state.resolver.is_brand_fixed(),
        runtime_mode: state.resolver.config().runtime_mode,
        misses: resolution.misses.clone(),
    })
}

#[derive(Debug, Serialize)]
pub struct BrandSummary {
    pub key: BrandKey,
    pub display_name: String,
    pub domain: String,
    pub subdomains: Vec<String>,
}

pub async fn list_brands(State(state): State<AppState>) -> Json<Vec<BrandSummary>> {
    let brands = state
        .resolver
        .registry()
        .brands()
        .map(|b| BrandSummary {
            key: b.key,
            display_name: b.display_name.clone(),
            domain: b.domain.clone(),
            subdomains: b.subdomains.clone(),
        })
        .collect();
    Json(brands)
}
