use super::lexicon::FILLER_WORDS;
use super::report::{Dimension, DimensionScore};
use super::transcript::Transcript;

/// Clarity dimension: share of word tokens that are filler words.
pub(crate) fn score(transcript: &Transcript) -> DimensionScore {
    let fillers = transcript
        .words()
        .iter()
        .filter(|word| FILLER_WORDS.contains(&word.to_lowercase().as_str()))
        .count();

    let word_count = transcript.word_count();
    let ratio = if word_count == 0 {
        0.0
    } else {
        fillers as f64 / word_count as f64 * 100.0
    };

    let points = if ratio <= 3.0 {
        15
    } else if ratio <= 6.0 {
        12
    } else {
        6
    };

    DimensionScore {
        dimension: Dimension::Clarity,
        points,
        feedback: vec![format!("Fillers: {fillers} ({}%)", ratio as u32)],
        coverage_log: Vec::new(),
    }
}
