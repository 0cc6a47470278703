//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Email input bound to the `email` field
/// - Submit button with in-flight handling
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Renders the login form.
///
/// # Endpoint
///
/// `GET /login`
///
/// The rendered input carries the baseline syntax constraints
/// (`type="email"`, `required`) for in-browser feedback. Submission handling
/// lives in `static/js/login-form.js`, which posts back to this route and
/// renders the per-field errors from the 422 payload.
///
/// # Template
///
/// Uses `templates/login.html` for server-side rendering.
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {}
}
