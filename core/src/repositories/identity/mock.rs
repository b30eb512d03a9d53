//! In-memory implementation of IdentityProvider for tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::identity::{Identity, NewAccount};
use crate::errors::DomainError;

use super::r#trait::IdentityProvider;

/// Default role handed to self-registered accounts
pub const DEFAULT_ROLE: &str = "member";

#[derive(Clone)]
struct Account {
    username: String,
    password: String,
    identity: Identity,
}

/// Mock user directory holding plaintext passwords (tests only)
#[derive(Clone)]
pub struct MockIdentityProvider {
    accounts: Arc<RwLock<Vec<Account>>>,
    next_id: Arc<AtomicI64>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Seed an account with explicit credentials and identity.
    pub async fn add_account(&self, username: &str, password: &str, identity: Identity) {
        let mut accounts = self.accounts.write().await;
        self.next_id
            .fetch_max(identity.id + 1, Ordering::SeqCst);
        accounts.push(Account {
            username: username.to_string(),
            password: password.to_string(),
            identity,
        });
    }

    /// Replace the role labels of an existing identity.
    pub async fn set_roles(&self, user_id: i64, roles: Vec<String>) {
        let mut accounts = self.accounts.write().await;
        if let Some(account) = accounts.iter_mut().find(|a| a.identity.id == user_id) {
            account.identity.roles = roles;
        }
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .map(|a| a.identity.clone()))
    }

    async fn create_account(&self, account: NewAccount) -> Result<Identity, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .iter()
            .any(|a| a.identity.email.eq_ignore_ascii_case(&account.email))
        {
            return Err(DomainError::Database {
                message: format!("duplicate email: {}", account.email),
            });
        }

        let identity = Identity {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            display_name: account.display_name(),
            email: account.email.clone(),
            roles: vec![DEFAULT_ROLE.to_string()],
        };

        accounts.push(Account {
            username: account.email,
            password: account.password,
            identity: identity.clone(),
        });

        Ok(identity)
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<Identity>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.identity.id == user_id)
            .map(|a| a.identity.clone()))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .any(|a| a.identity.email.eq_ignore_ascii_case(email)))
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Identity>, DomainError> {
        let needle = query.to_lowercase();
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .filter(|a| {
                a.identity.display_name.to_lowercase().contains(&needle)
                    || a.identity.email.to_lowercase().contains(&needle)
            })
            .take(limit as usize)
            .map(|a| a.identity.clone())
            .collect())
    }
}
