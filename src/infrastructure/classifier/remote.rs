//! HTTP adapter for the remote brain-tumor classification API.
//!
//! Speaks the API's wire format: a multipart POST of the image to
//! `<base>/predict`, answered on success with
//! `{ "prediction": "<label>", "confidence_scores": { "<label>": <f64>, ... } }`.
//! A single request is issued per call, with no retry and no timeout
//! override; callers wanting bounded latency add one externally.

use crate::domain::classification::{
    entity::{ClassScore, ClassificationResult},
    errors::{ClassifyError, RequestOutcome},
    upload::UploadedImage,
};
use crate::infrastructure::classifier::traits::{
    ClassifierService, EndpointProbe, EndpointStatus,
};
use async_trait::async_trait;
use http::StatusCode;
use serde::Deserialize;

pub struct RemoteClassifier {
    client: reqwest::Client,
    base_url: String,
}

/// Success body as emitted by the API. `confidence_scores` keeps the
/// server's key order (`serde_json` preserve_order), which later breaks
/// ties when ranking.
#[derive(Debug, Deserialize)]
struct PredictionPayload {
    prediction: String,
    confidence_scores: serde_json::Map<String, serde_json::Value>,
}

impl RemoteClassifier {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// Decode a 200 body into a result. Any missing or malformed field
    /// is a decode failure, never a partially populated result.
    pub(crate) fn decode_success_body(body: &[u8]) -> Result<ClassificationResult, ClassifyError> {
        let payload: PredictionPayload = serde_json::from_slice(body)
            .map_err(|e| ClassifyError::Transport(format!("undecodable response body: {}", e)))?;

        let mut scores = Vec::with_capacity(payload.confidence_scores.len());
        for (label, value) in payload.confidence_scores {
            let confidence = value.as_f64().ok_or_else(|| {
                ClassifyError::Transport(format!(
                    "confidence for '{}' is not a number",
                    label
                ))
            })?;
            scores.push(ClassScore { label, confidence });
        }

        ClassificationResult::new(payload.prediction, scores)
            .map_err(|e| ClassifyError::Transport(e.to_string()))
    }
}

#[async_trait]
impl ClassifierService for RemoteClassifier {
    async fn classify(&self, image: &UploadedImage) -> RequestOutcome {
        let part = reqwest::multipart::Part::bytes(image.data.to_vec())
            .file_name(image.filename.clone())
            .mime_str(&image.content_type)
            .map_err(|e| ClassifyError::Transport(format!("invalid MIME type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.predict_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("classification request failed: {}", e);
                ClassifyError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClassifyError::Transport(format!("failed to read body: {}", e)))?;

        // The API signals success with 200 exactly; other 2xx codes are
        // not part of its contract.
        if status != StatusCode::OK {
            return Err(ClassifyError::Server {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Self::decode_success_body(&body)
    }

    async fn probe(&self) -> EndpointProbe {
        let status = match self.client.get(&self.base_url).send().await {
            Ok(res) if res.status() == StatusCode::OK => EndpointStatus::Online,
            Ok(res) => {
                tracing::warn!("probe answered with status {}", res.status());
                EndpointStatus::Offline
            }
            Err(e) => {
                tracing::warn!("probe failed: {}", e);
                EndpointStatus::Offline
            }
        };
        EndpointProbe {
            status,
            checked_at: chrono::Utc::now(),
        }
    }
}
