use thiserror::Error;

/// Errors surfaced by the site logic.
///
/// None of these are fatal: the web shell logs them and falls back to a
/// default, or shows the message to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("unsupported locale tag: {0}")]
    UnsupportedLocale(String),

    #[error("invalid site config: {0}")]
    InvalidConfig(String),

    #[error("Bitte füllen Sie alle Felder aus. / Please fill in all fields.")]
    MissingFields,

    #[error("Bitte geben Sie eine gültige E-Mail-Adresse ein. / Please enter a valid email address.")]
    InvalidEmail,
}

pub type Result<T> = std::result::Result<T, SiteError>;
