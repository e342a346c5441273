//! Collaborator seams for the language backends the grader depends on.
//!
//! Each backend is expensive to stand up in a real deployment, so the
//! hosting process constructs one [`NlpToolkit`] at startup and shares
//! it read-only across every evaluation. Tests substitute fakes per
//! seam.

mod embedding;
mod grammar;
mod sentiment;
mod tokenize;

pub use embedding::{cosine_similarity, HashedNgramEncoder};
pub use grammar::HeuristicGrammarChecker;
pub use sentiment::LexiconSentimentScorer;
pub use tokenize::{PunctSentenceTokenizer, RegexWordTokenizer};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Failure raised by any language backend. Fatal to the evaluation in
/// progress; never retried.
#[derive(Debug, thiserror::Error)]
pub enum NlpError {
    #[error("nlp backend failure: {0}")]
    Backend(String),
}

/// Splits raw text into an ordered sequence of sentences.
pub trait SentenceTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, NlpError>;
}

/// Splits raw text into an ordered sequence of word tokens.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, NlpError>;
}

/// Encodes a batch of strings into fixed-dimension vectors.
pub trait EmbeddingEncoder: Send + Sync {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, NlpError>;
}

/// Reports detected grammar issues in raw text.
pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, NlpError>;
}

/// Decomposes raw text into positive/negative/neutral proportions.
pub trait SentimentScorer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<PolarityScores, NlpError>;
}

/// Single detected issue. Scoring consumes only the count; the offset
/// and message are kept for display parity with checker backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    pub offset: usize,
    pub message: String,
}

/// Polarity proportions, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Bundle of collaborator handles injected into the grader at startup.
#[derive(Clone)]
pub struct NlpToolkit {
    pub sentences: Arc<dyn SentenceTokenizer>,
    pub words: Arc<dyn WordTokenizer>,
    pub embedder: Arc<dyn EmbeddingEncoder>,
    pub grammar: Arc<dyn GrammarChecker>,
    pub sentiment: Arc<dyn SentimentScorer>,
}

impl NlpToolkit {
    /// Wires the built-in deterministic backends.
    pub fn baseline() -> Self {
        Self {
            sentences: Arc::new(PunctSentenceTokenizer),
            words: Arc::new(RegexWordTokenizer::new()),
            embedder: Arc::new(HashedNgramEncoder::new()),
            grammar: Arc::new(HeuristicGrammarChecker),
            sentiment: Arc::new(LexiconSentimentScorer),
        }
    }
}
