//! DTOs for the login form submission endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::form::{FieldErrors, FormData};

/// Payload answered when validation fails.
///
/// Carries the per-field messages plus the submitted values so the form can
/// be re-rendered with the user's input and inline errors.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: FieldErrors,
    pub submitted: FormData,
}

impl ValidationErrorResponse {
    pub fn new(errors: FieldErrors, submitted: FormData) -> Self {
        Self { errors, submitted }
    }
}

impl IntoResponse for ValidationErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

/// Payload answered when the submission passes the server policy.
///
/// Carries only the parsed data; what happens next (login link, session) is
/// out of scope for this service.
#[derive(Debug, Serialize)]
pub struct LoginAccepted {
    pub data: LoginData,
}

/// The validated form fields.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub email: String,
}

impl LoginAccepted {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            data: LoginData {
                email: email.into(),
            },
        }
    }
}
