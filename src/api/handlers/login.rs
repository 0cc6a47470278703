//! Handler for the login form submission.

use axum::Json;
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};

use crate::api::dto::login::{LoginAccepted, ValidationErrorResponse};
use crate::api::extract;
use crate::domain::policy::ServerEmailPolicy;
use crate::error::AppError;
use crate::state::AppState;

/// Validates a submitted login form.
///
/// # Endpoint
///
/// `POST /login`
///
/// Accepts `application/x-www-form-urlencoded` or `multipart/form-data`
/// bodies with an `email` field.
///
/// The rendered page checks syntax in the browser for feedback before
/// submitting, but anything checked there can be bypassed by posting
/// directly, so the submission is re-validated here with the stricter
/// policy. The policy composing the burner-domain lookup is built inside
/// this handler, per request; the lookup is never referenced by the
/// rendering side.
///
/// # Responses
///
/// - **200 OK** `{"data": {"email": ...}}` - submission accepted. The
///   downstream login step is out of scope for this service.
/// - **422 Unprocessable Entity** `{"errors": {...}, "submitted": {...}}` -
///   field-scoped validation messages plus the echoed input.
///
/// # Errors
///
/// Returns 400/415 via [`AppError`] when the body is not a decodable form.
pub async fn login_action_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let form = extract::form_data(req).await?;

    let policy = ServerEmailPolicy::new(state.burner_domains.as_ref());

    match policy.validate(&form).await {
        Ok(email) => {
            tracing::info!(email = %email, "login submission accepted");
            Ok(Json(LoginAccepted::new(email)).into_response())
        }
        Err(errors) => {
            tracing::debug!(?errors, "login submission rejected");
            Ok(ValidationErrorResponse::new(errors, form).into_response())
        }
    }
}
