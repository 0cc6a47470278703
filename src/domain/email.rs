//! Validated email address newtype.

use std::fmt;

use thiserror::Error;
use validator::ValidateEmail;

/// Error returned when a value fails the email syntax check.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid email")]
pub struct InvalidEmail;

/// A syntactically valid email address.
///
/// Construction goes through [`EmailAddress::parse`], so holders can rely on
/// the value containing an `@` with a non-empty domain part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses a raw form value into a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEmail`] when the value does not match standard
    /// email syntax.
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        if raw.validate_email() {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidEmail)
        }
    }

    /// Returns the domain part: everything after the last `@`.
    pub fn domain(&self) -> &str {
        // parse() guarantees the separator is present
        self.0.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("")
    }

    /// Returns the full address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
