use crate::error::AppError;
use crate::model::Shop;
use sqlx::PgConnection;

pub struct ShopService;

impl ShopService {
    /// Insert a shop for `owner_id`. The owner is checked by the foreign key only.
    pub async fn insert(
        conn: &mut PgConnection,
        shop_name: &str,
        address: &str,
        owner_id: i32,
    ) -> Result<Shop, AppError> {
        let shop = sqlx::query_as::<_, Shop>(
            r#"
            INSERT INTO shops (shop_name, address, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, shop_name, address, owner_id
            "#,
        )
        .bind(shop_name)
        .bind(address)
        .bind(owner_id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(shop)
    }
}
