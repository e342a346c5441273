use crate::nlp::SentimentScorer;

use super::report::{Dimension, DimensionScore};
use super::transcript::Transcript;
use super::GradeError;

/// Engagement dimension: tiers the positive polarity component.
pub(crate) fn score(
    transcript: &Transcript,
    sentiment: &dyn SentimentScorer,
) -> Result<DimensionScore, GradeError> {
    let polarity = sentiment.polarity(transcript.raw_text())?;

    let (points, tone) = if polarity.positive > 0.15 {
        (15, "Tone: High engagement")
    } else if polarity.positive > 0.1 {
        (12, "Tone: Moderate")
    } else {
        (9, "Tone: Neutral")
    };

    Ok(DimensionScore {
        dimension: Dimension::Engagement,
        points,
        feedback: vec![tone.to_string()],
        coverage_log: Vec::new(),
    })
}
