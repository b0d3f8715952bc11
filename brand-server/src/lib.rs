//! brand-server: HTTP surface for storefront brand resolution.
//!
//! Every request under `/api` passes through [`middleware::resolve_brand`],
//! which stores the [`brand_core::BrandResolution`] in request extensions.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
