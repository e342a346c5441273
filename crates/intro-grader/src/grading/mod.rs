//! Rubric scoring pipeline for spoken self-introduction transcripts.
//!
//! [`Grader::run`] fans a [`Transcript`] through five independent
//! sub-scorers (content, speed, grammar & vocabulary, clarity,
//! engagement) and sums their points into a 0-100 composite. The
//! pipeline is a pure function of the transcript and the read-only
//! collaborator handles; any backend failure aborts the whole
//! evaluation, never a partial report.

mod clarity;
mod content;
mod engagement;
mod language;
mod lexicon;
mod report;
mod router;
mod speed;
mod transcript;

#[cfg(test)]
mod tests;

pub use lexicon::{Topic, FILLER_WORDS, GREETINGS};
pub use report::{Dimension, DimensionScore, ScoreReport};
pub use router::{evaluation_router, EvaluationRequest};
pub use transcript::Transcript;

use crate::nlp::{NlpError, NlpToolkit};

/// Error raised while building or scoring a transcript.
#[derive(Debug, thiserror::Error)]
pub enum GradeError {
    #[error("transcript is empty")]
    EmptyTranscript,
    #[error(transparent)]
    Nlp(#[from] NlpError),
}

/// Stateless scorer around the injected collaborator handles. One
/// instance is built at process start and shared by every evaluation.
pub struct Grader {
    nlp: NlpToolkit,
}

impl Grader {
    pub fn new(nlp: NlpToolkit) -> Self {
        Self { nlp }
    }

    /// Builds the transcript through the injected tokenizers.
    pub fn transcript(&self, text: &str, duration_secs: u32) -> Result<Transcript, GradeError> {
        Transcript::new(text, duration_secs, &self.nlp)
    }

    /// Scores all five dimensions and assembles the composite report.
    pub fn run(&self, transcript: &Transcript) -> Result<ScoreReport, GradeError> {
        let content = content::score(transcript, self.nlp.embedder.as_ref())?;
        let speed = speed::score(transcript);
        let language = language::score(transcript, self.nlp.grammar.as_ref())?;
        let clarity = clarity::score(transcript);
        let engagement = engagement::score(transcript, self.nlp.sentiment.as_ref())?;

        Ok(ScoreReport::assemble(vec![
            content, speed, language, clarity, engagement,
        ]))
    }

    /// Convenience wrapper: tokenize then score in one call.
    pub fn grade(&self, text: &str, duration_secs: u32) -> Result<ScoreReport, GradeError> {
        let transcript = self.transcript(text, duration_secs)?;
        self.run(&transcript)
    }
}
