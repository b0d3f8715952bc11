//! brand-server: storefront brand resolution service.
//!
//! Reads config from env vars (a `.env` file is honoured):
//!   BIND_ADDR                  : listen address (default: 0.0.0.0:3000)
//!   BRAND_KEY                  : pin every request to one brand
//!   APP_ENV                    : development | test | production (default: production)
//!   BRAND_ALLOW_COOKIE_OVERRIDE: allow the signed override cookie in development
//!   BRAND_OVERRIDE_SECRET      : HS256 secret for override tokens (>= 32 bytes)

use std::sync::Arc;

use anyhow::Context;
use brand_core::{BrandRegistry, BrandResolver};
use brand_server::config::ServerConfig;
use brand_server::router::build_router;
use brand_server::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,brand_server=debug,brand_core=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid brand configuration")?;
    let registry = Arc::new(BrandRegistry::builtin().context("invalid brand catalog")?);
    let resolver = Arc::new(BrandResolver::new(registry, config.resolver)?);

    if let Some(key) = resolver.fixed_brand_key() {
        tracing::info!("brand pinned to {key}; host and cookie resolution disabled");
    }

    let app = build_router(AppState::new(resolver));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("brand-server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
