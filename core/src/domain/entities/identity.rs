//! Identity entity as exposed by the identity provider.

use serde::{Deserialize, Serialize};

/// A verified user identity, read-only to the auth core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier in the user directory
    pub id: i64,

    /// Name shown in the UI
    pub display_name: String,

    /// Primary email address
    pub email: String,

    /// Role labels; these become the access token's scope
    pub roles: Vec<String>,
}

/// Account-creation request handed to the identity provider
///
/// The password is opaque to the auth core; hashing policy belongs to the
/// provider.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewAccount {
    /// Display name derived the same way the directory derives it.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_trims_missing_parts() {
        let account = NewAccount {
            email: "a@b.c".into(),
            password: "secret".into(),
            first_name: "Ada".into(),
            last_name: String::new(),
        };
        assert_eq!(account.display_name(), "Ada");
    }
}
