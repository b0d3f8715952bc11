//! Router construction for the brand server.

use axum::{
    middleware as axum_mw,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::middleware::resolve_brand;
use crate::state::AppState;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Routes that see a resolved brand
    let branded = Router::new()
        .route("/api/brand", get(handlers::brand::current_brand))
        .route("/api/brand/theme", get(handlers::theme::theme_variables))
        .route("/api/brand/theme.css", get(handlers::theme::theme_css))
        .route("/api/brands", get(handlers::brand::list_brands))
        .route(
            "/api/dev/brand-override",
            post(handlers::dev_override::set_override)
                .delete(handlers::dev_override::clear_override),
        )
        .route_layer(axum_mw::from_fn_with_state(state.clone(), resolve_brand));

    let public = Router::new().route("/health", get(handlers::health::health));

    public
        .merge(branded)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
