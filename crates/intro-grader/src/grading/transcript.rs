use crate::nlp::NlpToolkit;

use super::GradeError;

/// Immutable evaluation input: the raw text plus the intended speaking
/// duration, with the token views and pace derived once at
/// construction and reused by every sub-scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    raw_text: String,
    duration_secs: u32,
    sentences: Vec<String>,
    words: Vec<String>,
    wpm: f64,
}

impl Transcript {
    /// Tokenizes `text` through the injected collaborators. Blank input
    /// is rejected here so scoring never sees an empty transcript.
    pub fn new(text: &str, duration_secs: u32, nlp: &NlpToolkit) -> Result<Self, GradeError> {
        if text.trim().is_empty() {
            return Err(GradeError::EmptyTranscript);
        }

        let sentences = nlp.sentences.tokenize(text)?;
        let words = nlp.words.tokenize(text)?;
        let wpm = if duration_secs == 0 {
            0.0
        } else {
            words.len() as f64 / f64::from(duration_secs) * 60.0
        };

        Ok(Self {
            raw_text: text.to_string(),
            duration_secs,
            sentences,
            words,
            wpm,
        })
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Words per minute; defined as 0 when the duration is 0.
    pub fn wpm(&self) -> f64 {
        self.wpm
    }
}
