//! Credential verification.

use crate::user::{Role, User, ORGANIZATION};

/// Turns an email/password pair into a user, or nothing.
///
/// Callers never learn why verification failed.
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Option<User>;
}

/// One row of the fixed credential table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Credential {
    pub fn new(email: &str, password: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

/// The hard-coded demo accounts.
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    entries: Vec<Credential>,
}

impl DemoCredentials {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Credential] {
        &self.entries
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new(vec![
            Credential::new("admin@municipality.gov", "admin123", Role::Admin),
            Credential::new("staff@municipality.gov", "staff123", Role::Staff),
            Credential::new("demo@flowguard.ai", "demo123", Role::Admin),
        ])
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, email: &str, password: &str) -> Option<User> {
        self.entries
            .iter()
            .find(|c| c.email == email && c.password == password)
            .map(|c| User {
                id: "1".to_string(),
                email: c.email.clone(),
                name: c.role.display_name().to_string(),
                role: c.role,
                organization: ORGANIZATION.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_table_has_three_accounts() {
        assert_eq!(DemoCredentials::default().entries().len(), 3);
    }

    #[test]
    fn staff_account_gets_staff_name() {
        let user = DemoCredentials::default()
            .verify("staff@municipality.gov", "staff123")
            .unwrap();
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.name, "Staff Member");
        assert_eq!(user.organization, "Municipal Water Management");
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let creds = DemoCredentials::default();
        assert_eq!(creds.verify("admin@municipality.gov", "nope"), None);
        assert_eq!(creds.verify("nobody@municipality.gov", "admin123"), None);
    }

    #[test]
    fn email_match_is_exact() {
        let creds = DemoCredentials::default();
        assert_eq!(creds.verify("Demo@FlowGuard.ai", "demo123"), None);
        assert_eq!(creds.verify(" demo@flowguard.ai", "demo123"), None);
    }
}
