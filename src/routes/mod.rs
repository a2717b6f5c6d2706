//! Route groups. Each takes the state it needs and returns a stateless `Router` ready to merge.

pub mod auth;
pub mod common;
pub mod products;
pub use auth::auth_routes;
pub use common::{common_routes, common_routes_with_ready};
pub use products::product_routes;
