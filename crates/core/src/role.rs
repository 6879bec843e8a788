//! Dashboard roles as carried by the backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role granted to a dashboard account
///
/// The backend serializes roles with their Spring-style names
/// (`ROLE_USER`, `ROLE_ADMIN`). Unknown names are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Admin,
    Other(String),
}

impl Role {
    pub const USER: &'static str = "ROLE_USER";
    pub const ADMIN: &'static str = "ROLE_ADMIN";

    /// Wire name of the role
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => Self::USER,
            Self::Admin => Self::ADMIN,
            Self::Other(name) => name,
        }
    }

    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::USER => Self::User,
            Self::ADMIN => Self::Admin,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::from("ROLE_ADMIN"), Role::Admin);
        assert_eq!(Role::from("ROLE_USER"), Role::User);
        assert_eq!(
            Role::from("ROLE_AUDITOR"),
            Role::Other("ROLE_AUDITOR".to_string())
        );
        assert_eq!(Role::Admin.to_string(), "ROLE_ADMIN");
    }

    #[test]
    fn test_role_serde() {
        let role: Role = serde_json::from_str("\"ROLE_ADMIN\"").unwrap();
        assert!(role.is_admin());
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"ROLE_USER\"");
    }
}
