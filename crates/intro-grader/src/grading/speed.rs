use super::report::{Dimension, DimensionScore};
use super::transcript::Transcript;

/// Speed dimension: classifies the precomputed words-per-minute. The
/// ideal band sits inside the acceptable band, so it is tested first.
pub(crate) fn score(transcript: &Transcript) -> DimensionScore {
    let wpm = transcript.wpm();
    let shown = wpm as u32;

    let (points, message) = if (111.0..=140.0).contains(&wpm) {
        (10, format!("Pace is ideal: {shown} WPM"))
    } else if (81.0..=160.0).contains(&wpm) {
        (6, format!("Pace acceptable: {shown} WPM"))
    } else {
        (2, format!("Pace issue: {shown} WPM"))
    };

    DimensionScore {
        dimension: Dimension::Speed,
        points,
        feedback: vec![message],
        coverage_log: Vec::new(),
    }
}
