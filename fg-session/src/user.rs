use serde::{Deserialize, Serialize};
use std::fmt;

/// Organization every demo account belongs to.
pub const ORGANIZATION: &str = "Municipal Water Management";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Display name given to an account of this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "System Administrator",
            Role::Staff => "Staff Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Staff => f.write_str("staff"),
        }
    }
}

/// The authenticated actor. Serialized as
/// `{"id","email","name","role","organization"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub organization: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_lowercase_role() {
        let user = User {
            id: "1".to_string(),
            email: "staff@municipality.gov".to_string(),
            name: Role::Staff.display_name().to_string(),
            role: Role::Staff,
            organization: ORGANIZATION.to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","email":"staff@municipality.gov","name":"Staff Member","role":"staff","organization":"Municipal Water Management"}"#
        );
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
