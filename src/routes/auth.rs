use crate::handlers::auth::{login, register, register_shopkeeper};
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/register/shopkeeper", post(register_shopkeeper))
        .route("/login", post(login))
        .with_state(state)
}
