//! Identity provider trait abstracting the user directory.

use async_trait::async_trait;

use crate::domain::entities::identity::{Identity, NewAccount};
use crate::errors::DomainError;

/// External user directory
///
/// The auth core never sees password hashes; credentials go in, identities
/// come out. Implementations own hashing policy and storage.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify a username/password pair.
    ///
    /// Returns `Ok(None)` for both unknown users and wrong passwords so the
    /// caller cannot distinguish the two.
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError>;

    /// Create an account with the directory's default low-privilege role.
    async fn create_account(&self, account: NewAccount) -> Result<Identity, DomainError>;

    /// Resolve an identity by id.
    async fn find_by_id(&self, user_id: i64) -> Result<Option<Identity>, DomainError>;

    /// Whether an account already exists for this email.
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Directory search over name and email, capped at `limit` results.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Identity>, DomainError>;
}
