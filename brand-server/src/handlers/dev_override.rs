//! POST/DELETE /api/dev/brand-override: set or clear the signed override cookie.
//!
//! Development only. Outside development both return 403; without a
//! configured secret, POST returns 503.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use brand_core::signer::TOKEN_TTL_HOURS;
use brand_core::{BrandError, BrandKey, OVERRIDE_COOKIE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OverrideRequest {
    pub brand: String,
}

#[derive(Debug, Serialize)]
pub struct OverrideResponse {
    pub brand: BrandKey,
    pub expires_at: DateTime<Utc>,
}

fn require_development(state: &AppState) -> Result<(), BrandError> {
    let mode = state.resolver.config().runtime_mode;
    if mode.is_development() {
        Ok(())
    } else {
        Err(BrandError::OverrideUnavailable(mode))
    }
}

pub fn override_cookie(token: &str) -> String {
    format!(
        "{OVERRIDE_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        TOKEN_TTL_HOURS * 3600
    )
}

pub fn cleared_cookie() -> String {
    format!("{OVERRIDE_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

pub async fn set_override(
    State(state): State<AppState>,
    Json(body): Json<OverrideRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_development(&state)?;
    let signer = state
        .resolver
        .signer()
        .ok_or(BrandError::SignerUnavailable)?;
    let brand: BrandKey = body.brand.parse()?;
    let issued = signer.issue(brand)?;

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, override_cookie(&issued.token))],
        Json(OverrideResponse {
            brand: issued.brand,
            expires_at: issued.expires_at,
        }),
    ))
}

pub async fn clear_override(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    require_development(&state)?;
    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, cleared_cookie())]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_attributes() {
        assert_eq!(
            override_cookie("a.b.c"),
            "brand_override=a.b.c; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400"
        );
        assert!(cleared_cookie().ends_with("Max-Age=0"));
    }
}
