//! Product catalog: create with a unique SKU, list everything.

use crate::dto::ProductCreate;
use crate::error::AppError;
use crate::model::Product;
use sqlx::PgConnection;

fn sku_taken(sku: &str) -> String {
    format!("Product with SKU '{}' already exists.", sku)
}

pub struct ProductService;

impl ProductService {
    pub async fn find_by_sku(conn: &mut PgConnection, sku: &str) -> Result<Option<Product>, AppError> {
        tracing::debug!(%sku, "find product by sku");
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, product_name, sku, price FROM products WHERE sku = $1",
        )
        .bind(sku)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(product)
    }

    /// Create a product. An existing SKU, or losing an insert race on it, is a `Conflict`.
    pub async fn create(conn: &mut PgConnection, req: &ProductCreate) -> Result<Product, AppError> {
        if Self::find_by_sku(conn, &req.sku).await?.is_some() {
            tracing::warn!(sku = %req.sku, "product rejected: sku already exists");
            return Err(AppError::Conflict(sku_taken(&req.sku)));
        }
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (product_name, sku, price)
            VALUES ($1, $2, $3)
            RETURNING id, product_name, sku, price
            "#,
        )
        .bind(&req.product_name)
        .bind(&req.sku)
        .bind(req.price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, || sku_taken(&req.sku)))?;
        tracing::info!(product_id = product.id, sku = %product.sku, "product created");
        Ok(product)
    }

    /// All products in storage order (no ORDER BY).
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Product>, AppError> {
        tracing::debug!("list products");
        let rows = sqlx::query_as::<_, Product>("SELECT id, product_name, sku, price FROM products")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }
}
