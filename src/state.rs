//! Shared application state for all routes.

use crate::error::AppError;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

/// Process-wide resources, created once at startup and handed to every handler through `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// One request's database session. Returned to the pool when dropped, on every exit path.
pub type Session = PoolConnection<Postgres>;

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Acquire the request-scoped session.
    pub async fn session(&self) -> Result<Session, AppError> {
        Ok(self.pool.acquire().await?)
    }
}
