use serde::{Deserialize, Serialize};

use cb_core::domain::entities::identity::Identity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<Identity> for UserSummary {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.display_name,
            email: identity.email,
            roles: identity.roles,
        }
    }
}

/// Query string of GET /users/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub limit: Option<u32>,
}
