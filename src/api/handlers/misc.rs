//! Service metadata handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::api::state::AppState;

/// Service description returned from the root endpoint.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

/// Endpoint paths advertised by the service.
#[derive(Debug, Serialize)]
pub struct EndpointMap {
    pub health: String,
    pub users: String,
    pub user: String,
}

/// Describe the service and its endpoints.
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to the Roster API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            health: "/health".to_string(),
            users: "/api/users".to_string(),
            user: "/api/users/{id}".to_string(),
        },
    })
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: f64,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
