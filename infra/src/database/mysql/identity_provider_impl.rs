//! MySQL implementation of the IdentityProvider trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use cb_core::domain::entities::identity::{Identity, NewAccount};
use cb_core::errors::DomainError;
use cb_core::repositories::IdentityProvider;

/// Role granted to self-registered accounts
const DEFAULT_ROLE: &str = "member";

/// User directory backed by the `users` table
///
/// Passwords are stored as bcrypt hashes. Role labels are stored as a JSON
/// array in a text column so role sets stay free-form.
pub struct MySqlIdentityProvider {
    pool: MySqlPool,
    bcrypt_cost: u32,
}

impl MySqlIdentityProvider {
    pub fn new(pool: MySqlPool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    fn row_to_identity(row: &sqlx::mysql::MySqlRow) -> Result<Identity, DomainError> {
        let roles_json: String = row.try_get("roles").map_err(db_err)?;
        let roles: Vec<String> = serde_json::from_str(&roles_json).map_err(|e| {
            DomainError::Internal {
                message: format!("corrupt roles column: {e}"),
            }
        })?;

        Ok(Identity {
            id: row.try_get("id").map_err(db_err)?,
            display_name: row.try_get("display_name").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            roles,
        })
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: e.to_string(),
    }
}

#[async_trait]
impl IdentityProvider for MySqlIdentityProvider {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, display_name, roles, password_hash
            FROM users
            WHERE email = ?
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let password_hash: String = row.try_get("password_hash").map_err(db_err)?;
        let verified = bcrypt::verify(password, &password_hash).unwrap_or(false);
        if !verified {
            return Ok(None);
        }

        Ok(Some(Self::row_to_identity(&row)?))
    }

    async fn create_account(&self, account: NewAccount) -> Result<Identity, DomainError> {
        let password_hash =
            bcrypt::hash(&account.password, self.bcrypt_cost).map_err(|e| {
                DomainError::Internal {
                    message: format!("password hashing failed: {e}"),
                }
            })?;

        let display_name = account.display_name();
        let roles = vec![DEFAULT_ROLE.to_string()];
        let roles_json = serde_json::to_string(&roles).map_err(|e| DomainError::Internal {
            message: format!("role serialization failed: {e}"),
        })?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, display_name, roles)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&account.email)
        .bind(&password_hash)
        .bind(&display_name)
        .bind(&roles_json)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(Identity {
            id: result.last_insert_id() as i64,
            display_name,
            email: account.email,
            roles,
        })
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<Identity>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, display_name, roles
            FROM users
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(|r| Self::row_to_identity(&r)).transpose()
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS found")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        let found: i8 = row.try_get("found").map_err(db_err)?;
        Ok(found == 1)
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Identity>, DomainError> {
        let pattern = format!("%{}%", query.replace('%', "\\%").replace('_', "\\_"));

        let rows = sqlx::query(
            r#"
            SELECT id, email, display_name, roles
            FROM users
            WHERE display_name LIKE ? OR email LIKE ?
            ORDER BY display_name
            LIMIT ?
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::row_to_identity).collect()
    }
}
