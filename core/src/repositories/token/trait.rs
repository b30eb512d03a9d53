//! Token store trait defining the interface for refresh-token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Durable store of refresh-token records
///
/// The store is a plain key-value table: records are inserted, looked up by
/// their unique `jti`, and flipped to revoked. They are never deleted; dead
/// records remain as an audit trail.
///
/// # Concurrency
/// `mark_revoked` must be an atomic conditional write. When two rotation
/// attempts race on the same record, exactly one may observe `true`; the
/// loser sees `false` and must fail the rotation. Correctness of
/// rotate-on-use relies entirely on this guarantee.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a new record and return it with its store-assigned id.
    ///
    /// Fails if the record's `jti` already exists.
    async fn insert(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError>;

    /// Look up a record by its unique identifier, scoped to its owner.
    async fn find_by_jti_and_user(
        &self,
        jti: &str,
        user_id: i64,
    ) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Flip `revoked` to true, once.
    ///
    /// Returns `true` only for the caller that performed the flip; `false`
    /// when the record is absent or was already revoked.
    async fn mark_revoked(&self, id: i64) -> Result<bool, DomainError>;
}
