//! User lookups, registration, and credential checks.

use super::password::{hash_password, verify_password, DUMMY_HASH};
use super::shops::ShopService;
use crate::dto::{ShopkeeperCreate, UserCreate, UserLogin};
use crate::error::AppError;
use crate::model::{Shop, User, SHOPKEEPER_ROLE};
use sqlx::{Connection, PgConnection};

/// How a login identifier is matched: an email when it contains '@', otherwise a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Email(&'a str),
    Phone(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn classify(identifier: &'a str) -> Self {
        if identifier.contains('@') {
            Identifier::Email(identifier)
        } else {
            Identifier::Phone(identifier)
        }
    }
}

/// Insert payload for a user row. `password` is already hashed.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub password_hash: &'a str,
    pub role: &'a str,
}

fn email_taken(email: &str) -> String {
    format!("User with email '{}' already exists.", email)
}

pub struct UserService;

impl UserService {
    /// Exact, case-sensitive match on email.
    pub async fn find_by_email(conn: &mut PgConnection, email: &str) -> Result<Option<User>, AppError> {
        tracing::debug!(%email, "find user by email");
        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, email, phone, password, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }

    /// Phone is not unique; the earliest registered user wins.
    pub async fn find_by_phone(conn: &mut PgConnection, phone: &str) -> Result<Option<User>, AppError> {
        tracing::debug!(%phone, "find user by phone");
        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, email, phone, password, role FROM users WHERE phone = $1 ORDER BY id LIMIT 1",
        )
        .bind(phone)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }

    pub async fn find_by_identifier(
        conn: &mut PgConnection,
        identifier: Identifier<'_>,
    ) -> Result<Option<User>, AppError> {
        match identifier {
            Identifier::Email(email) => Self::find_by_email(conn, email).await,
            Identifier::Phone(phone) => Self::find_by_phone(conn, phone).await,
        }
    }

    /// Insert one user row and return it. A unique-email race surfaces as `Conflict`.
    pub async fn insert(conn: &mut PgConnection, new: &NewUser<'_>) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, phone, password, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, email, phone, password, role
            "#,
        )
        .bind(new.full_name)
        .bind(new.email)
        .bind(new.phone)
        .bind(new.password_hash)
        .bind(new.role)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, || email_taken(new.email)))?;
        Ok(user)
    }

    async fn ensure_email_free(conn: &mut PgConnection, email: &str) -> Result<(), AppError> {
        if Self::find_by_email(conn, email).await?.is_some() {
            tracing::warn!(%email, "registration rejected: email already exists");
            return Err(AppError::Conflict(email_taken(email)));
        }
        Ok(())
    }

    /// Register a customer or staff user with the role they supplied.
    pub async fn register(conn: &mut PgConnection, req: &UserCreate) -> Result<User, AppError> {
        Self::ensure_email_free(conn, &req.email).await?;
        let password_hash = hash_password(&req.password)?;
        let user = Self::insert(
            conn,
            &NewUser {
                full_name: &req.full_name,
                email: &req.email,
                phone: req.phone.as_deref(),
                password_hash: &password_hash,
                role: &req.role,
            },
        )
        .await?;
        tracing::info!(user_id = user.id, role = %user.role, "user registered");
        Ok(user)
    }

    /// Register a shopkeeper and their shop. Both rows commit together or not at all.
    pub async fn register_shopkeeper(
        conn: &mut PgConnection,
        req: &ShopkeeperCreate,
    ) -> Result<(User, Shop), AppError> {
        let mut tx = conn.begin().await?;
        Self::ensure_email_free(&mut tx, &req.email).await?;
        let password_hash = hash_password(&req.password)?;
        let user = Self::insert(
            &mut tx,
            &NewUser {
                full_name: &req.full_name,
                email: &req.email,
                phone: Some(&req.phone),
                password_hash: &password_hash,
                role: SHOPKEEPER_ROLE,
            },
        )
        .await?;
        let shop = ShopService::insert(&mut tx, &req.shop_name, &req.address, user.id).await?;
        tx.commit().await?;
        tracing::info!(user_id = user.id, shop_id = shop.id, "shopkeeper registered");
        Ok((user, shop))
    }

    /// Resolve credentials to a user. Unknown identifier and wrong password are indistinguishable.
    pub async fn authenticate(conn: &mut PgConnection, req: &UserLogin) -> Result<User, AppError> {
        let identifier = Identifier::classify(&req.identifier);
        let user = Self::find_by_identifier(conn, identifier).await?;
        let stored = user.as_ref().map_or(DUMMY_HASH, |u| u.password.as_str());
        let verified = verify_password(&req.password, stored);
        match user {
            Some(user) if verified => Ok(user),
            _ => {
                tracing::warn!(?identifier, "login failed");
                Err(AppError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_sign_selects_email_lookup() {
        assert_eq!(Identifier::classify("a@b.co"), Identifier::Email("a@b.co"));
        assert_eq!(Identifier::classify("@"), Identifier::Email("@"));
    }

    #[test]
    fn anything_else_is_a_phone_number() {
        assert_eq!(Identifier::classify("+15550100"), Identifier::Phone("+15550100"));
        assert_eq!(Identifier::classify(""), Identifier::Phone(""));
    }

    #[test]
    fn conflict_text_names_the_email() {
        assert_eq!(email_taken("x@y.z"), "User with email 'x@y.z' already exists.");
    }
}
