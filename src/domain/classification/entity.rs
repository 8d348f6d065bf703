use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label the remote model emits when no tumor pattern is found.
pub const BENIGN_LABEL: &str = "notumor";

/// One class label with the model's confidence for it.
///
/// Confidence is nominally in [0,1] but is not enforced here: the remote
/// API is the authority and some deployments emit unnormalized values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    pub label: String,
    pub confidence: f64,
}

impl ClassScore {
    /// Confidence rendered as a percentage with one decimal place,
    /// e.g. `0.914` becomes `"91.4%"`.
    pub fn percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// Raised when a decoded response names a prediction that is absent from
/// its own confidence scores.
#[derive(Debug, Error)]
#[error("predicted class '{prediction}' is not among the scored labels")]
pub struct InconsistentResult {
    pub prediction: String,
}

/// A normalized classification outcome for one uploaded image.
///
/// # Invariants
/// - `predicted_class` is always a label present in `scores`
/// - `scores` preserves the order the server emitted its labels in
///
/// Both are established at construction; a result that violates them
/// cannot be built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    predicted_class: String,
    scores: Vec<ClassScore>,
}

impl ClassificationResult {
    /// Build a result, verifying that the prediction is one of the
    /// scored labels.
    pub fn new(
        predicted_class: String,
        scores: Vec<ClassScore>,
    ) -> Result<Self, InconsistentResult> {
        if !scores.iter().any(|s| s.label == predicted_class) {
            return Err(InconsistentResult {
                prediction: predicted_class,
            });
        }
        Ok(Self {
            predicted_class,
            scores,
        })
    }

    pub fn predicted_class(&self) -> &str {
        &self.predicted_class
    }

    pub fn scores(&self) -> &[ClassScore] {
        &self.scores
    }

    /// Scores sorted by confidence descending. The sort is stable, so
    /// equal confidences keep the server's emission order.
    pub fn ranked_scores(&self) -> Vec<ClassScore> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Human-facing reading of the prediction.
    pub fn verdict(&self) -> Verdict {
        if self.predicted_class == BENIGN_LABEL {
            Verdict::Benign
        } else {
            Verdict::Finding {
                class: self.predicted_class.clone(),
            }
        }
    }
}

/// The diagnostic message class for a prediction: reassuring for the
/// benign label, cautionary for anything else.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Benign,
    Finding { class: String },
}

impl Verdict {
    pub fn message(&self) -> String {
        match self {
            Verdict::Benign => "No tumor patterns detected.".to_string(),
            Verdict::Finding { class } => format!("Potential {} detected.", class),
        }
    }

    pub fn is_benign(&self) -> bool {
        matches!(self, Verdict::Benign)
    }
}
