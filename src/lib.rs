//! InvenTrack: inventory-tracking REST backend library.

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use app::build_router;
pub use config::Config;
pub use error::AppError;
pub use routes::{auth_routes, common_routes, common_routes_with_ready, product_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
