//! Services: single-table queries and writes per entity, plus password hashing.

mod password;
mod products;
mod shops;
mod users;
pub use password::{hash_password, verify_password};
pub use products::ProductService;
pub use shops::ShopService;
pub use users::{Identifier, NewUser, UserService};
