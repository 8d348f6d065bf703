use crate::domain::classification::entity::ClassificationResult;
use serde::Serialize;

/// One row of the confidence breakdown, ready for display: percentage
/// formatted to one decimal place, predicted label flagged so the UI
/// can emphasize it.
#[derive(Debug, Clone, Serialize)]
pub struct RankedScore {
    pub label: String,
    pub confidence: f64,
    pub percent: String,
    pub predicted: bool,
}

/// Rendered view of a successful classification: the predicted class,
/// its verdict message, and all scores ranked by confidence.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub prediction: String,
    pub benign: bool,
    pub verdict: String,
    pub scores: Vec<RankedScore>,
}

impl From<&ClassificationResult> for ClassificationReport {
    fn from(result: &ClassificationResult) -> Self {
        let verdict = result.verdict();
        let scores = result
            .ranked_scores()
            .into_iter()
            .map(|s| RankedScore {
                predicted: s.label == result.predicted_class(),
                percent: s.percent(),
                label: s.label,
                confidence: s.confidence,
            })
            .collect();

        Self {
            prediction: result.predicted_class().to_string(),
            benign: verdict.is_benign(),
            verdict: verdict.message(),
            scores,
        }
    }
}
