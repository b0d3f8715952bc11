//! GET /api/brand/theme and /api/brand/theme.css: style variables of the resolved brand.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use brand_core::{BrandKey, BrandResolution, ThemeVariables};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub brand: BrandKey,
    pub variables: ThemeVariables,
}

pub async fn theme_variables(
    Extension(resolution): Extension<BrandResolution>,
) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        brand: resolution.key(),
        variables: resolution.theme_variables(),
    })
}

pub async fn theme_css(Extension(resolution): Extension<BrandResolution>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/css; charset=utf-8")],
        resolution.theme_variables().to_css(),
    )
}
