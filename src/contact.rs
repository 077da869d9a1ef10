//! Contact form validation.
//!
//! Nothing is sent anywhere yet; a valid submission only produces the
//! acknowledgment message and the form is reset by the caller.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, SiteError};

pub const SUCCESS_MESSAGE: &str = "Vielen Dank für Ihre Nachricht! Wir werden uns bald bei Ihnen melden.\n\nThank you for your message! We will get back to you soon.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Element id of the field inside the contact form.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn all() -> &'static [ContactField] {
        &[ContactField::Name, ContactField::Email, ContactField::Message]
    }
}

/// Trimmed field values of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn from_raw(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::all()
            .iter()
            .copied()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    /// Blank fields are reported before a malformed email.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "contact form rejected: blank fields");
            return Err(SiteError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            tracing::debug!("contact form rejected: malformed email");
            return Err(SiteError::InvalidEmail);
        }
        Ok(())
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_trimmed() {
        let s = ContactSubmission::from_raw("  Ada ", "\tada@example.org\n", " hi ");
        assert_eq!(s.name, "Ada");
        assert_eq!(s.email, "ada@example.org");
        assert_eq!(s.message, "hi");
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn blank_message_is_rejected() {
        let s = ContactSubmission::from_raw("Ada", "ada@example.org", "   ");
        assert_eq!(s.missing_fields(), vec![ContactField::Message]);
        assert_eq!(s.validate(), Err(SiteError::MissingFields));
    }

    #[test]
    fn blank_fields_win_over_bad_email() {
        let s = ContactSubmission::from_raw("", "not-an-email", "hello");
        assert_eq!(s.validate(), Err(SiteError::MissingFields));
    }

    #[test]
    fn email_needs_a_dot_in_the_domain() {
        assert!(!is_valid_email("foo@bar"));
        assert!(is_valid_email("foo@bar.com"));
        assert!(!is_valid_email("foo bar@baz.com"));
        assert!(!is_valid_email("foo@@bar.com"));
        assert!(!is_valid_email("@bar.com"));
        assert!(is_valid_email("a.b@c.d.e"));

        let s = ContactSubmission::from_raw("Ada", "foo@bar", "hello");
        assert_eq!(s.validate(), Err(SiteError::InvalidEmail));
    }

    #[test]
    fn messages_are_bilingual() {
        assert_eq!(
            SiteError::MissingFields.to_string(),
            "Bitte füllen Sie alle Felder aus. / Please fill in all fields."
        );
        assert_eq!(
            SiteError::InvalidEmail.to_string(),
            "Bitte geben Sie eine gültige E-Mail-Adresse ein. / Please enter a valid email address."
        );
        assert!(SUCCESS_MESSAGE.contains("\n\nThank you for your message!"));
    }

    #[test]
    fn field_ids() {
        let ids: Vec<&str> = ContactField::all().iter().map(|f| f.id()).collect();
        assert_eq!(ids, ["name", "email", "message"]);
    }
}
