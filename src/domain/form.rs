//! Raw form submissions and field-scoped validation errors.

use std::collections::BTreeMap;

use serde::Serialize;

/// Key-value pairs extracted from a submitted form body.
///
/// Only textual fields are kept; a repeated key overwrites the earlier value.
/// The submission lives for one request-response cycle and is echoed back
/// verbatim when validation fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value submitted for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns `true` when no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for FormData {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validation error messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error set with a single field message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Attaches a message to a field, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Returns the message attached to `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns `true` when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_keeps_last_value() {
        let mut form = FormData::new();
        form.insert("email", "first@example.com");
        form.insert("email", "second@example.com");
        assert_eq!(form.get("email"), Some("second@example.com"));
    }

    #[test]
    fn missing_field_is_none() {
        let form = FormData::new();
        assert!(form.is_empty());
        assert_eq!(form.get("email"), None);
    }

    #[test]
    fn form_data_serializes_as_plain_map() {
        let mut form = FormData::new();
        form.insert("email", "user@example.com");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "user@example.com" }));
    }

    #[test]
    fn single_error_round_trips() {
        let errors = FieldErrors::single("email", "invalid email");
        assert_eq!(errors.get("email"), Some("invalid email"));
        assert!(!errors.is_empty());
    }
}
