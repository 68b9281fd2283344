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
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: reports how many records the in-memory store holds
/// 2. **Resolver**: probes the outbound DNS resolver
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let resolver_check = check_resolver(&state).await;

    let all_healthy = store_check.status == "ok" && resolver_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            resolver: resolver_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// The store has no external dependency; the check reports its size.
async fn check_store(state: &AppState) -> CheckStatus {
    let count = state.shortener.stored_count().await;
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Records: {count}")),
    }
}

/// Probes the resolver backend with a liveness lookup.
async fn check_resolver(state: &AppState) -> CheckStatus {
    if state.resolver.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Resolver probe failed".to_string()),
        }
    }
}
