//! MySQL implementation of the TokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use cb_core::domain::entities::token::RefreshTokenRecord;
use cb_core::errors::DomainError;
use cb_core::repositories::TokenRepository;

/// Refresh-token store backed by the `refresh_tokens` table
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<RefreshTokenRecord, DomainError> {
        Ok(RefreshTokenRecord {
            id: row.try_get("id").map_err(db_err)?,
            user_id: row.try_get("user_id").map_err(db_err)?,
            jti: row.try_get("jti").map_err(db_err)?,
            token_hash: row.try_get("token_hash").map_err(db_err)?,
            expires_at: row.try_get::<DateTime<Utc>, _>("expires_at").map_err(db_err)?,
            revoked: row.try_get("revoked").map_err(db_err)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(db_err)?,
        })
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: e.to_string(),
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn insert(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError> {
        // jti carries a UNIQUE index; a duplicate surfaces as a database error
        let result = sqlx::query(
            r#"
            INSERT INTO refresh_tokens (user_id, jti, token_hash, expires_at, revoked, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.user_id)
        .bind(&record.jti)
        .bind(&record.token_hash)
        .bind(record.expires_at)
        .bind(record.revoked)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(RefreshTokenRecord {
            id: result.last_insert_id() as i64,
            ..record
        })
    }

    async fn find_by_jti_and_user(
        &self,
        jti: &str,
        user_id: i64,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, jti, token_hash, expires_at, revoked, created_at
            FROM refresh_tokens
            WHERE jti = ? AND user_id = ?
            LIMIT 1
            "#,
        )
        .bind(jti)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(|r| Self::row_to_record(&r)).transpose()
    }

    async fn mark_revoked(&self, id: i64) -> Result<bool, DomainError> {
        // conditional write: under concurrent rotation only one caller
        // observes rows_affected == 1
        let result = sqlx::query(
            "UPDATE refresh_tokens SET revoked = TRUE WHERE id = ? AND revoked = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(result.rows_affected() == 1)
    }
}
