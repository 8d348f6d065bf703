use crate::domain::classification::{errors::RequestOutcome, upload::UploadedImage};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness of the remote endpoint as seen by the probe. Informational
/// only; classification never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointStatus {
    Online,
    Offline,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointProbe {
    pub status: EndpointStatus,
    pub checked_at: DateTime<Utc>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassifierService: Send + Sync {
    /// Send one image to the remote model and map the HTTP outcome.
    /// Never panics; every failure mode lands in the outcome's error.
    async fn classify(&self, image: &UploadedImage) -> RequestOutcome;

    /// GET the endpoint's base URL; 200 means online, anything else
    /// (including connection failure) means offline.
    async fn probe(&self) -> EndpointProbe;
}
