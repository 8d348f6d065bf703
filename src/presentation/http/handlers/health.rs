use crate::{
    infrastructure::classifier::traits::EndpointStatus, presentation::http::state::AppState,
};
use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Liveness of this service. The process holds no connections or
/// state, so reaching the handler is the whole check.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct StatusResponse {
    endpoint: String,
    status: EndpointStatus,
    checked_at: DateTime<Utc>,
}

/// Probe the remote classification endpoint. Informational only;
/// classification requests never consult this.
pub async fn endpoint_status(State(state): State<AppState>) -> impl IntoResponse {
    let probe = state.classifier.probe().await;
    Json(StatusResponse {
        endpoint: state.config.classifier_base_url.clone(),
        status: probe.status,
        checked_at: probe.checked_at,
    })
}
