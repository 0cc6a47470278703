//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: Burner-domain lookup unusable
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let burner_check = check_burner_domains(&state).await;

    let all_healthy = burner_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            burner_domains: burner_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the burner-domain snapshot is loaded and non-empty.
async fn check_burner_domains(state: &AppState) -> CheckStatus {
    if state.burner_domains.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Domain snapshot loaded".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Domain snapshot is empty".to_string()),
        }
    }
}
