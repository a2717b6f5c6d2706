//! Registration and login handlers.

use crate::dto::{ShopkeeperCreate, UserCreate, UserLogin, UserOut};
use crate::error::AppError;
use crate::response::{created, message, ok};
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /register: customer or staff sign-up. 201 with the stored user (no password).
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<UserCreate>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut session = state.session().await?;
    let user = UserService::register(&mut session, &body).await?;
    Ok(created(UserOut::from(user)))
}

/// POST /register/shopkeeper: shopkeeper user plus their shop.
pub async fn register_shopkeeper(
    State(state): State<AppState>,
    Json(body): Json<ShopkeeperCreate>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut session = state.session().await?;
    let (user, shop) = UserService::register_shopkeeper(&mut session, &body).await?;
    Ok(message(
        StatusCode::CREATED,
        format!(
            "Shopkeeper '{}' and shop '{}' created successfully.",
            user.full_name, shop.shop_name
        ),
    ))
}

/// POST /login: email or phone plus password. 401 on any mismatch.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<UserLogin>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut session = state.session().await?;
    let user = UserService::authenticate(&mut session, &body).await?;
    Ok(ok(UserOut::from(user)))
}
