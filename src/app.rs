//! Application assembly: every route group merged into one router with tracing and a body limit.

use crate::error::AppError;
use crate::routes::{auth_routes, common_routes_with_ready, product_routes};
use crate::state::AppState;
use axum::{http::Uri, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Every payload here is a handful of short strings.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(auth_routes(state.clone()))
        .merge(product_routes(state))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
