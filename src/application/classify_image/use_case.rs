use crate::application::classify_image::dto::ClassificationReport;
use crate::domain::classification::{errors::ClassifyError, upload::UploadedImage};
use crate::infrastructure::classifier::traits::ClassifierService;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum ClassifyImageError {
    /// Precondition failure: the presenter is never invoked without a
    /// payload, so an empty upload is rejected before any request.
    #[error("uploaded image has no content")]
    EmptyUpload,

    #[error(transparent)]
    Outcome(#[from] ClassifyError),
}

/// Orchestrates one classification round-trip: precondition check,
/// remote call through the classifier seam, normalization of the
/// outcome into a display-ready report.
///
/// The use case is a pure function of its inputs. It holds no state
/// across calls; each classification is independent of prior ones.
pub struct ClassifyImageUseCase {
    classifier: Arc<dyn ClassifierService>,
}

impl ClassifyImageUseCase {
    pub fn new(classifier: Arc<dyn ClassifierService>) -> Self {
        Self { classifier }
    }

    #[instrument(skip(self, image), fields(
        filename = %image.filename,
        content_type = %image.content_type,
        image_size = image.data.len()
    ))]
    pub async fn execute(
        &self,
        image: UploadedImage,
    ) -> Result<ClassificationReport, ClassifyImageError> {
        if image.is_empty() {
            warn!("rejecting empty upload");
            return Err(ClassifyImageError::EmptyUpload);
        }

        let result = self.classifier.classify(&image).await?;
        info!(prediction = %result.predicted_class(), "classification complete");
        Ok(ClassificationReport::from(&result))
    }
}
