//! HTTP handlers for registration, login, and the product catalog.

pub mod auth;
pub mod products;
pub use auth::*;
pub use products::*;
