use super::common::*;
use crate::grading::engagement;
use crate::grading::{DimensionScore, GradeError};

fn engagement_with(positive: f64) -> DimensionScore {
    let kit = toolkit();
    let transcript = transcript(&kit, "placeholder text.", 60);
    engagement::score(&transcript, &FixedPolarity(positive)).expect("scores")
}

#[test]
fn high_positive_polarity_earns_top_tier() {
    let score = engagement_with(0.5);
    assert_eq!(score.points, 15);
    assert_eq!(score.feedback, vec!["Tone: High engagement"]);
}

#[test]
fn boundary_at_fifteen_hundredths_is_exclusive() {
    let score = engagement_with(0.15);
    assert_eq!(score.points, 12);
    assert_eq!(score.feedback, vec!["Tone: Moderate"]);

    let score = engagement_with(0.151);
    assert_eq!(score.points, 15);
}

#[test]
fn boundary_at_one_tenth_is_exclusive() {
    let score = engagement_with(0.1);
    assert_eq!(score.points, 9);
    assert_eq!(score.feedback, vec!["Tone: Neutral"]);

    let score = engagement_with(0.101);
    assert_eq!(score.points, 12);
}

#[test]
fn flat_polarity_reads_neutral() {
    let score = engagement_with(0.0);
    assert_eq!(score.points, 9);
    assert_eq!(score.feedback, vec!["Tone: Neutral"]);
}

#[test]
fn backend_failure_aborts_scoring() {
    let kit = toolkit();
    let transcript = transcript(&kit, "placeholder text.", 60);
    let error = engagement::score(&transcript, &FailingSentiment).expect_err("must fail");
    assert!(matches!(error, GradeError::Nlp(_)));
}
