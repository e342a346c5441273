use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::grading::Transcript;
use crate::nlp::{
    EmbeddingEncoder, GrammarChecker, GrammarIssue, NlpError, NlpToolkit, PolarityScores,
    SentenceTokenizer, SentimentScorer, WordTokenizer,
};

pub(super) struct FixedSentences(pub(super) Vec<String>);

impl SentenceTokenizer for FixedSentences {
    fn tokenize(&self, _text: &str) -> Result<Vec<String>, NlpError> {
        Ok(self.0.clone())
    }
}

pub(super) struct FixedWords(pub(super) Vec<String>);

impl WordTokenizer for FixedWords {
    fn tokenize(&self, _text: &str) -> Result<Vec<String>, NlpError> {
        Ok(self.0.clone())
    }
}

/// Embedder returning scripted vectors per exact input string; unknown
/// inputs encode to the zero vector.
#[derive(Default)]
pub(super) struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl StubEmbedder {
    pub(super) fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

impl EmbeddingEncoder for StubEmbedder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, NlpError> {
        Ok(texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| vec![0.0, 0.0])
            })
            .collect())
    }
}

pub(super) struct FailingEmbedder;

impl EmbeddingEncoder for FailingEmbedder {
    fn encode(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, NlpError> {
        Err(NlpError::Backend("embedding backend offline".to_string()))
    }
}

/// Grammar checker reporting a fixed number of issues.
pub(super) struct ScriptedGrammar(pub(super) usize);

impl GrammarChecker for ScriptedGrammar {
    fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, NlpError> {
        Ok((0..self.0)
            .map(|index| GrammarIssue {
                offset: index,
                message: format!("issue {index}"),
            })
            .collect())
    }
}

pub(super) struct FailingGrammar;

impl GrammarChecker for FailingGrammar {
    fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, NlpError> {
        Err(NlpError::Backend("grammar backend offline".to_string()))
    }
}

pub(super) struct FixedPolarity(pub(super) f64);

impl SentimentScorer for FixedPolarity {
    fn polarity(&self, _text: &str) -> Result<PolarityScores, NlpError> {
        Ok(PolarityScores {
            positive: self.0,
            negative: 0.0,
            neutral: 1.0 - self.0,
        })
    }
}

pub(super) struct FailingSentiment;

impl SentimentScorer for FailingSentiment {
    fn polarity(&self, _text: &str) -> Result<PolarityScores, NlpError> {
        Err(NlpError::Backend("sentiment backend offline".to_string()))
    }
}

pub(super) fn distinct_words(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("word{index}")).collect()
}

/// `total` words drawn from a pool of `distinct` spellings.
pub(super) fn words_with_distinct(distinct: usize, total: usize) -> Vec<String> {
    (0..total)
        .map(|index| format!("w{}", index.min(distinct - 1)))
        .collect()
}

pub(super) fn sentences(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("Sentence {index}.")).collect()
}

/// Deterministic toolkit baseline for tests: ten distinct words, three
/// sentences, zero grammar issues, flat sentiment, zero-vector
/// embeddings. Override individual handles per test.
pub(super) fn toolkit() -> NlpToolkit {
    NlpToolkit {
        sentences: Arc::new(FixedSentences(sentences(3))),
        words: Arc::new(FixedWords(distinct_words(10))),
        embedder: Arc::new(StubEmbedder::default()),
        grammar: Arc::new(ScriptedGrammar(0)),
        sentiment: Arc::new(FixedPolarity(0.0)),
    }
}

pub(super) fn transcript(kit: &NlpToolkit, text: &str, duration_secs: u32) -> Transcript {
    Transcript::new(text, duration_secs, kit).expect("transcript builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 65536)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
