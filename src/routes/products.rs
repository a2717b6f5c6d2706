//! Product routes. Served with and without the trailing slash.

use crate::handlers::products::{create_product, list_products};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products/", get(list_products).post(create_product))
        .route("/products", get(list_products).post(create_product))
        .with_state(state)
}
