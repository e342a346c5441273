use regex::Regex;

use super::{NlpError, SentenceTokenizer, WordTokenizer};

/// Sentence splitter keyed on terminal punctuation runs followed by
/// whitespace (or end of input). Terminal punctuation stays attached
/// to its sentence.
pub struct PunctSentenceTokenizer;

impl SentenceTokenizer for PunctSentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, NlpError> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            current.push(ch);
            if !matches!(ch, '.' | '!' | '?') {
                continue;
            }

            // Absorb the rest of the punctuation run plus trailing quotes.
            while let Some(&next) = chars.peek() {
                if matches!(next, '.' | '!' | '?' | '"' | '\'' | ')') {
                    current.push(next);
                    chars.next();
                } else {
                    break;
                }
            }

            // A period inside a number ("3.5") does not end a sentence.
            if chars.peek().map_or(true, |next| next.is_whitespace()) {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                current.clear();
            }
        }

        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }

        Ok(sentences)
    }
}

const WORD_PATTERN: &str = r"\w+(?:'\w+)*";

/// Word tokenizer producing alphanumeric tokens; interior apostrophes
/// stay inside the token ("Rubik's"). Punctuation is dropped, so the
/// token stream matches what WPM, TTR, and filler counting expect.
pub struct RegexWordTokenizer {
    pattern: Regex,
}

impl RegexWordTokenizer {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(WORD_PATTERN).expect("word pattern compiles"),
        }
    }
}

impl Default for RegexWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer for RegexWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, NlpError> {
        Ok(self
            .pattern
            .find_iter(text)
            .map(|found| found.as_str().to_string())
            .collect())
    }
}
