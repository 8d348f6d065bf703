use super::{
    handlers::{classify, health, info},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(info::service_info))
        .route("/health", get(health::health_check))
        .route("/api/v1/status", get(health::endpoint_status))
        .route("/api/v1/classify", post(classify::classify_image))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
