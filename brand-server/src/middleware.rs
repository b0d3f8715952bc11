//! Per-request brand resolution layer.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::extract::request_context;
use crate::state::AppState;

pub const BRAND_KEY_HEADER: &str = "x-brand-key";
pub const BRAND_SOURCE_HEADER: &str = "x-brand-source";

/// Resolve the brand once, expose it to handlers as an `Extension<BrandResolution>`,
/// and tag the response with the outcome.
pub async fn resolve_brand(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let resolution = state.resolver.resolve(&request_context(&request));
    let key = resolution.key();
    let source = resolution.source;
    request.extensions_mut().insert(resolution);

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(BRAND_KEY_HEADER, HeaderValue::from_static(key.as_str()));
    headers.insert(BRAND_SOURCE_HEADER, HeaderValue::from_static(source.as_str()));
    response
}
