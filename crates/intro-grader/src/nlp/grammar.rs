use super::{GrammarChecker, GrammarIssue, NlpError};

/// Rule-based checker covering the mistakes that dominate spoken
/// self-introductions: repeated words, uncapitalized sentence openers,
/// a lowercase standalone "i", and "a" before a vowel-initial word.
pub struct HeuristicGrammarChecker;

impl GrammarChecker for HeuristicGrammarChecker {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, NlpError> {
        let mut issues = Vec::new();

        let mut previous: Option<String> = None;
        for (offset, word) in words_with_offsets(text) {
            let lower = word.to_lowercase();

            if word == "i" {
                issues.push(GrammarIssue {
                    offset,
                    message: "the pronoun 'I' should be capitalized".to_string(),
                });
            }

            if let Some(prev) = &previous {
                if *prev == lower && lower.chars().all(char::is_alphabetic) {
                    issues.push(GrammarIssue {
                        offset,
                        message: format!("repeated word '{word}'"),
                    });
                }
                if prev == "a" && matches!(lower.chars().next(), Some('a' | 'e' | 'i' | 'o')) {
                    issues.push(GrammarIssue {
                        offset,
                        message: format!("use 'an' before '{word}'"),
                    });
                }
            }
            previous = Some(lower);
        }

        for (offset, opener) in sentence_openers(text) {
            if opener.is_lowercase() {
                issues.push(GrammarIssue {
                    offset,
                    message: "sentence should start with a capital letter".to_string(),
                });
            }
        }

        issues.sort_by_key(|issue| issue.offset);
        Ok(issues)
    }
}

fn words_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_alphanumeric() || ch == '\'' {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(begin) = start.take() {
            words.push((begin, &text[begin..idx]));
        }
    }
    if let Some(begin) = start {
        words.push((begin, &text[begin..]));
    }
    words
}

/// First alphabetic character of each sentence, where sentences begin
/// at the start of input and after a terminal punctuation mark.
fn sentence_openers(text: &str) -> Vec<(usize, char)> {
    let mut openers = Vec::new();
    let mut expect_start = true;

    for (idx, ch) in text.char_indices() {
        if expect_start && !ch.is_whitespace() {
            if ch.is_alphabetic() {
                openers.push((idx, ch));
            }
            expect_start = false;
        }
        if matches!(ch, '.' | '!' | '?') {
            expect_start = true;
        }
    }
    openers
}
