//! Row types for the four tables.

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Argon2 PHC string; never serialized.
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub sku: String,
    pub price: f64,
}

#[derive(Debug, Clone, FromRow)]
pub struct Shop {
    pub id: i32,
    pub shop_name: String,
    pub address: String,
    pub owner_id: i32,
}

/// Stock of one product in one shop. No endpoint writes these rows yet.
#[derive(Debug, Clone, FromRow)]
pub struct Inventory {
    pub shop_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Role assigned by shopkeeper sign-up.
pub const SHOPKEEPER_ROLE: &str = "shopkeeper";
