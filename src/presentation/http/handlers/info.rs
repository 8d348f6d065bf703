use axum::Json;

pub async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "NeuroScan",
        "description": "Upload a brain MRI scan to detect and classify potential tumors",
        "version": env!("CARGO_PKG_VERSION"),
        "accepted_image_types": ["jpg", "jpeg", "png", "bmp", "webp", "tiff"],
        "paths": {
            "/health": { "get": { "summary": "Service health check" } },
            "/api/v1/status": { "get": { "summary": "Remote classification endpoint liveness" } },
            "/api/v1/classify": { "post": { "summary": "Classify an uploaded MRI scan (multipart field 'file')" } }
        }
    }))
}
