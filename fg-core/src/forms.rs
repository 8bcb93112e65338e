//! Synchronous field validation for the contact and signup forms.
//!
//! Validation runs before any simulated submission; a form with errors is
//! never submitted. Error `Display` strings are shown to the user as-is.

use serde::{Deserialize, Serialize};

/// Minimum length of a contact message.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Minimum length of a signup password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Roles offered by the signup form.
pub const SIGNUP_ROLES: [&str; 7] = [
    "Municipal Engineer",
    "Public Works Director",
    "Environmental Manager",
    "Water Resource Manager",
    "Emergency Response Coordinator",
    "City Administrator",
    "Other",
];

/// Matches `something@something.something` with no whitespace and exactly
/// one `@`. The domain needs some dot with text on both sides of it; other
/// dots, trailing or doubled, are allowed.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

/// A single field-level problem on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactFieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Company/Organization is required")]
    CompanyRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Inline errors of the contact form, at most one per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactErrors {
    pub name: Option<ContactFieldError>,
    pub email: Option<ContactFieldError>,
    pub company: Option<ContactFieldError>,
    pub message: Option<ContactFieldError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.company.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<ContactFieldError> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Company => self.company,
            ContactField::Message => self.message,
        }
    }

    /// Editing a field clears that field's error.
    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Company => self.company = None,
            ContactField::Message => self.message = None,
        }
    }
}

/// Contents of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = ContactErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(ContactFieldError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.email = Some(ContactFieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.email = Some(ContactFieldError::EmailInvalid);
        }

        if self.company.trim().is_empty() {
            errors.company = Some(ContactFieldError::CompanyRequired);
        }

        if self.message.trim().is_empty() {
            errors.message = Some(ContactFieldError::MessageRequired);
        } else if self.message.chars().count() < MIN_MESSAGE_LEN {
            errors.message = Some(ContactFieldError::MessageTooShort);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The first failing signup check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
}

/// Contents of the account request form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub organization: String,
    pub role: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Confirmation is checked before length.
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@city.gov".to_string(),
            company: "City of Springfield".to_string(),
            message: "Interested in a pilot program.".to_string(),
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("demo@flowguard.ai"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("demo@flowguard"));
        assert!(!is_valid_email("@flowguard.ai"));
        assert!(!is_valid_email("demo@.ai"));
        assert!(!is_valid_email("demo@flowguard."));
        assert!(!is_valid_email("de mo@flowguard.ai"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("plainaddress"));
    }

    #[test]
    fn any_inner_dot_satisfies_the_domain() {
        assert!(is_valid_email("a@b.c."));
        assert!(is_valid_email("a@b.."));
        assert!(is_valid_email("a@b.c..d."));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@."));
    }

    #[test]
    fn complete_contact_form_is_valid() {
        assert_eq!(filled_contact().validate(), Ok(()));
    }

    #[test]
    fn empty_contact_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.name, Some(ContactFieldError::NameRequired));
        assert_eq!(errors.email, Some(ContactFieldError::EmailRequired));
        assert_eq!(errors.company, Some(ContactFieldError::CompanyRequired));
        assert_eq!(errors.message, Some(ContactFieldError::MessageRequired));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled_contact();
        form.name = "   ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(ContactField::Name), Some(ContactFieldError::NameRequired));
        assert_eq!(errors.get(ContactField::Email), None);
    }

    #[test]
    fn shape_and_length_checks() {
        let mut form = filled_contact();
        form.email = "not-an-email".to_string();
        form.message = "Too short".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.email, Some(ContactFieldError::EmailInvalid));
        assert_eq!(errors.message, Some(ContactFieldError::MessageTooShort));
        assert_eq!(
            errors.message.unwrap().to_string(),
            "Message must be at least 10 characters long"
        );
    }

    #[test]
    fn clearing_one_field_keeps_the_others() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear(ContactField::Email);
        assert_eq!(errors.email, None);
        assert!(errors.name.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn signup_checks_match_before_length() {
        let mut form = SignupForm {
            password: "short".to_string(),
            confirm_password: "other".to_string(),
            ..SignupForm::default()
        };
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));

        form.confirm_password = "short".to_string();
        assert_eq!(form.validate(), Err(SignupError::PasswordTooShort));

        form.password = "longenough".to_string();
        form.confirm_password = "longenough".to_string();
        assert_eq!(form.validate(), Ok(()));
    }
}
