use neuroscan::application::classify_image::dto::ClassificationReport;
use neuroscan::domain::classification::entity::{ClassScore, ClassificationResult};

fn score(label: &str, confidence: f64) -> ClassScore {
    ClassScore {
        label: label.to_string(),
        confidence,
    }
}

#[test]
fn predicted_class_is_always_among_scored_labels() {
    let ok = ClassificationResult::new(
        "meningioma".into(),
        vec![score("meningioma", 0.7), score("notumor", 0.3)],
    );
    assert!(ok.is_ok());

    let missing = ClassificationResult::new("glioma".into(), vec![score("notumor", 1.0)]);
    assert!(missing.is_err());
}

#[test]
fn reference_payload_ranks_in_expected_order() {
    // The canonical four-class response, emitted with the winner first.
    let result = ClassificationResult::new(
        "notumor".into(),
        vec![
            score("notumor", 0.91),
            score("glioma", 0.05),
            score("meningioma", 0.03),
            score("pituitary", 0.01),
        ],
    )
    .unwrap();

    let ranked = result.ranked_scores();
    let labels: Vec<_> = ranked.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["notumor", "glioma", "meningioma", "pituitary"]);
    assert_eq!(ranked[0].confidence, 0.91);
}

#[test]
fn equal_confidences_keep_emission_order() {
    let result = ClassificationResult::new(
        "glioma".into(),
        vec![
            score("pituitary", 0.25),
            score("glioma", 0.25),
            score("meningioma", 0.25),
            score("notumor", 0.25),
        ],
    )
    .unwrap();

    let labels: Vec<_> = result
        .ranked_scores()
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, ["pituitary", "glioma", "meningioma", "notumor"]);
}

#[test]
fn report_formats_percentages_to_one_decimal() {
    let result = ClassificationResult::new(
        "notumor".into(),
        vec![score("notumor", 0.914), score("glioma", 0.086)],
    )
    .unwrap();

    let report = ClassificationReport::from(&result);
    assert_eq!(report.scores[0].percent, "91.4%");
    assert_eq!(report.scores[1].percent, "8.6%");
}

#[test]
fn report_verdict_is_benign_only_for_notumor() {
    let benign = ClassificationResult::new(
        "notumor".into(),
        vec![score("notumor", 0.9), score("glioma", 0.1)],
    )
    .unwrap();
    let report = ClassificationReport::from(&benign);
    assert!(report.benign);
    assert_eq!(report.verdict, "No tumor patterns detected.");

    let finding = ClassificationResult::new(
        "pituitary".into(),
        vec![score("pituitary", 0.6), score("notumor", 0.4)],
    )
    .unwrap();
    let report = ClassificationReport::from(&finding);
    assert!(!report.benign);
    assert_eq!(report.verdict, "Potential pituitary detected.");
    assert!(report.scores[0].predicted);
}

#[test]
fn out_of_range_confidences_are_not_rejected() {
    // The remote API is the authority; unnormalized scores pass through.
    let result = ClassificationResult::new(
        "glioma".into(),
        vec![score("glioma", 1.7), score("notumor", -0.2)],
    );
    assert!(result.is_ok());
}
