//! Request and response bodies.

use crate::model::{Product, User};
use serde::{Deserialize, Serialize};

/// POST /register
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserCreate {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// POST /login. `identifier` is an email when it contains '@', otherwise a phone number.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserLogin {
    pub identifier: String,
    pub password: String,
}

/// POST /register/shopkeeper: user and shop in one sign-up.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShopkeeperCreate {
    pub shop_name: String,
    pub address: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// POST /products/
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductCreate {
    pub product_name: String,
    pub sku: String,
    pub price: f64,
}

/// User as returned to clients: the password hash is not part of the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOut {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
}

impl From<User> for UserOut {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            email: u.email,
            role: u.role,
            phone: u.phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOut {
    pub id: i32,
    pub product_name: String,
    pub sku: String,
    pub price: f64,
}

impl From<Product> for ProductOut {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            product_name: p.product_name,
            sku: p.sku,
            price: p.price,
        }
    }
}
