//! In-memory implementation of TokenRepository for tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token store backed by a `Vec`
#[derive(Clone)]
pub struct MockTokenRepository {
    records: Arc<RwLock<Vec<RefreshTokenRecord>>>,
    next_id: Arc<AtomicI64>,
}

impl MockTokenRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Snapshot of every stored record, revoked ones included.
    pub async fn records(&self) -> Vec<RefreshTokenRecord> {
        self.records.read().await.clone()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn insert(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.jti == record.jti) {
            return Err(DomainError::Database {
                message: format!("duplicate jti: {}", record.jti),
            });
        }

        let mut saved = record;
        saved.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        records.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_jti_and_user(
        &self,
        jti: &str,
        user_id: i64,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.jti == jti && r.user_id == user_id)
            .cloned())
    }

    async fn mark_revoked(&self, id: i64) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) if !record.revoked => {
                record.revoked = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
