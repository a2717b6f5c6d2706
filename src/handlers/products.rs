//! Product catalog handlers.

use crate::dto::{ProductCreate, ProductOut};
use crate::error::AppError;
use crate::response::{created, ok};
use crate::service::ProductService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /products/
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductCreate>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut session = state.session().await?;
    let product = ProductService::create(&mut session, &body).await?;
    Ok(created(ProductOut::from(product)))
}

/// GET /products/: every product, storage order.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut session = state.session().await?;
    let products: Vec<ProductOut> = ProductService::list(&mut session)
        .await?
        .into_iter()
        .map(ProductOut::from)
        .collect();
    Ok(ok(products))
}
