use std::collections::HashSet;

use crate::nlp::GrammarChecker;

use super::report::{Dimension, DimensionScore};
use super::transcript::Transcript;
use super::GradeError;

/// Grammar & vocabulary dimension. Grammar normalizes the checker's
/// issue count into errors-per-100-words and maps the inverted rate to
/// a three-tier score; vocabulary tiers the type-token ratio.
pub(crate) fn score(
    transcript: &Transcript,
    grammar: &dyn GrammarChecker,
) -> Result<DimensionScore, GradeError> {
    let issues = grammar.check(transcript.raw_text())?;
    let errors = issues.len();
    let word_count = transcript.word_count();

    let error_rate = if word_count == 0 {
        0.0
    } else {
        errors as f64 / word_count as f64 * 100.0
    };
    let metric = 1.0 - f64::min(error_rate / 10.0, 1.0);
    let grammar_points = if metric > 0.9 {
        10
    } else if metric > 0.7 {
        8
    } else {
        4
    };

    let distinct = transcript
        .words()
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<HashSet<_>>()
        .len();
    let ttr = if word_count == 0 {
        0.0
    } else {
        distinct as f64 / word_count as f64
    };
    let vocab_points = if ttr > 0.5 {
        10
    } else if ttr > 0.4 {
        8
    } else {
        6
    };

    Ok(DimensionScore {
        dimension: Dimension::Grammar,
        points: grammar_points + vocab_points,
        feedback: vec![
            format!("Grammar errors: {errors}"),
            format!("Vocab score: {vocab_points}/10"),
        ],
        coverage_log: Vec::new(),
    })
}
