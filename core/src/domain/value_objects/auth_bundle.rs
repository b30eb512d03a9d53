//! Authentication bundle returned by login and refresh.

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::AccessClaims;

/// Everything a successful login or refresh hands back to the HTTP layer
#[derive(Debug, Clone)]
pub struct AuthBundle {
    /// Signed access token
    pub access_token: String,

    /// Plaintext copy of the access-token claims (convenience only)
    pub access_claims: AccessClaims,

    /// Raw refresh token; the client must store it, the server keeps a hash
    pub refresh_token: String,

    /// Identifier of the refresh-token record, presented back on rotation
    pub refresh_jti: String,

    /// The authenticated identity
    pub identity: Identity,
}
