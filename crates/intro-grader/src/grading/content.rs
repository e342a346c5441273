use crate::nlp::{cosine_similarity, EmbeddingEncoder, NlpError};

use super::lexicon::{Topic, GREETINGS};
use super::report::{Dimension, DimensionScore};
use super::transcript::Transcript;
use super::GradeError;

const SALUTATION_POINTS: u8 = 5;
const FLOW_POINTS: u8 = 5;
const COVERAGE_CAP: u8 = 30;
const POINTS_PER_TOPIC: f64 = 4.3;
const SEMANTIC_THRESHOLD: f32 = 0.4;

/// Content dimension: salutation, topic coverage (keyword first, then
/// a semantic probe against the sentence embeddings), and flow.
pub(crate) fn score(
    transcript: &Transcript,
    embedder: &dyn EmbeddingEncoder,
) -> Result<DimensionScore, GradeError> {
    let mut points = 0;
    let mut feedback = Vec::new();
    let mut coverage_log = Vec::new();

    let lower = transcript.raw_text().to_lowercase();

    if GREETINGS.iter().any(|greeting| lower.contains(greeting)) {
        points += SALUTATION_POINTS;
        feedback.push("Salutation present".to_string());
    } else {
        feedback.push("No salutation found".to_string());
    }

    let sentence_embeddings = embedder.encode(transcript.sentences())?;

    let mut hits = 0_u32;
    for topic in Topic::ALL {
        if topic
            .keywords()
            .iter()
            .any(|keyword| lower.contains(keyword))
        {
            hits += 1;
            coverage_log.push(format!("{}: Keyword match", topic.label()));
            continue;
        }

        let query = topic.semantic_query();
        let query_embeddings = embedder.encode(std::slice::from_ref(&query))?;
        let query_embedding = query_embeddings.first().ok_or_else(|| {
            NlpError::Backend("embedding encoder returned no vector for query".to_string())
        })?;

        let best = sentence_embeddings
            .iter()
            .map(|sentence| cosine_similarity(query_embedding, sentence))
            .fold(f32::MIN, f32::max);

        if best > SEMANTIC_THRESHOLD {
            hits += 1;
            coverage_log.push(format!("{}: Semantic match", topic.label()));
        }
    }

    points += coverage_points(hits);
    feedback.push(format!("Content coverage: {hits}/7 topics"));

    if transcript.sentences().len() > 2 {
        points += FLOW_POINTS;
        feedback.push("Flow is logical".to_string());
    }

    Ok(DimensionScore {
        dimension: Dimension::Content,
        points,
        feedback,
        coverage_log,
    })
}

/// Truncated 4.3 points per covered topic, capped at 30. The cap only
/// binds at 7/7 (4.3 * 7 = 30.1); 6/7 lands on 25.
pub(crate) fn coverage_points(hits: u32) -> u8 {
    COVERAGE_CAP.min((f64::from(hits) * POINTS_PER_TOPIC) as u8)
}
