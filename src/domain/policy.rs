//! Email validation policies for the login form.
//!
//! Two policies cover the two execution contexts. [`ClientEmailPolicy`] checks
//! syntax only; it is the policy the rendered form mirrors as native input
//! constraints for in-browser feedback. [`ServerEmailPolicy`] composes the same
//! baseline with a burner-domain predicate and is the one the action handler
//! runs, because anything the browser checked can be bypassed by posting the
//! form directly.

use crate::domain::burner::BurnerDomainList;
use crate::domain::email::EmailAddress;
use crate::domain::form::{FieldErrors, FormData};

/// Name of the form field carrying the email address.
pub const EMAIL_FIELD: &str = "email";

/// Message attached to [`EMAIL_FIELD`] when the syntax check fails.
pub const INVALID_EMAIL_MESSAGE: &str = "invalid email";

/// Message attached to [`EMAIL_FIELD`] when the domain is a known
/// disposable provider.
pub const BURNER_DOMAIN_MESSAGE: &str = "Sorry, we don't support this email provider.";

/// Syntax-only baseline policy, safe for any execution context.
///
/// Stateless and reusable across requests; a missing `email` field fails the
/// same way a malformed one does.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientEmailPolicy;

impl ClientEmailPolicy {
    /// Validates a submission against the baseline email-syntax check.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] with [`INVALID_EMAIL_MESSAGE`] on
    /// [`EMAIL_FIELD`] when the field is missing or malformed.
    pub fn validate(&self, form: &FormData) -> Result<EmailAddress, FieldErrors> {
        let raw = form.get(EMAIL_FIELD).unwrap_or_default();
        EmailAddress::parse(raw)
            .map_err(|_| FieldErrors::single(EMAIL_FIELD, INVALID_EMAIL_MESSAGE))
    }
}

/// Server-side policy: the baseline syntax check plus burner-domain rejection.
///
/// Borrows the domain lookup for the duration of one request; the action
/// handler builds a fresh instance per submission. Everything this policy
/// accepts, [`ClientEmailPolicy`] accepts too.
pub struct ServerEmailPolicy<'a> {
    base: ClientEmailPolicy,
    burner_domains: &'a dyn BurnerDomainList,
}

impl<'a> ServerEmailPolicy<'a> {
    /// Composes the baseline policy with a burner-domain lookup.
    pub fn new(burner_domains: &'a dyn BurnerDomainList) -> Self {
        Self {
            base: ClientEmailPolicy,
            burner_domains,
        }
    }

    /// Runs the baseline check, then rejects disposable domains.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] on [`EMAIL_FIELD`] with either
    /// [`INVALID_EMAIL_MESSAGE`] or [`BURNER_DOMAIN_MESSAGE`].
    pub async fn validate(&self, form: &FormData) -> Result<EmailAddress, FieldErrors> {
        let email = self.base.validate(form)?;

        if self.burner_domains.is_burner(email.domain()).await {
            return Err(FieldErrors::single(EMAIL_FIELD, BURNER_DOMAIN_MESSAGE));
        }

        Ok(email)
    }
}
