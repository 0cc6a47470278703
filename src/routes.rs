//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /login`   - Login form page (public)
//! - `POST /login`   - Form submission validation (public)
//! - `GET  /health`  - Health check (public)
//! - `/static/*`     - Static assets (form script and styles)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//!
//! The GET side of `/login` renders through [`crate::web`] and carries only
//! the baseline input constraints; the POST side is the only code path that
//! composes the burner-domain lookup.

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api::handlers::{health_handler, login_action_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::login_page_handler;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/login", get(login_page_handler).post(login_action_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
