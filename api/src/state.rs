//! Shared application state injected into every handler.

use std::sync::Arc;

use cb_core::repositories::{IdentityProvider, TokenRepository};
use cb_core::services::auth::AuthService;
use cb_core::services::token::AccessTokenCodec;

/// Application state generic over the identity provider and token store
///
/// Production wires MySQL implementations; tests wire the in-memory mocks
/// from `cb_core::repositories`.
pub struct AppState<I, T>
where
    I: IdentityProvider,
    T: TokenRepository,
{
    pub auth_service: Arc<AuthService<I, T>>,
    pub codec: Arc<AccessTokenCodec>,
    pub identities: Arc<I>,
}
