use super::{NlpError, PolarityScores, SentimentScorer};

/// Valence lexicon, alphabetical. Magnitudes follow the usual
/// social-media sentiment scales (roughly -4..4).
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("angry", -2.3),
    ("awesome", 3.1),
    ("bad", -2.5),
    ("best", 3.2),
    ("boring", -1.3),
    ("confident", 2.2),
    ("dream", 1.8),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 2.2),
    ("fail", -2.5),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("interesting", 1.7),
    ("love", 3.2),
    ("nice", 1.8),
    ("passion", 2.4),
    ("passionate", 2.4),
    ("poor", -1.9),
    ("proud", 2.2),
    ("sad", -2.1),
    ("special", 1.8),
    ("terrible", -2.9),
    ("unique", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worry", -1.9),
    ("worst", -3.1),
];

/// Lexicon scorer reporting polarity proportions: each valenced token
/// contributes its magnitude plus one to its side, every other token
/// contributes one to neutral, and the three sums are normalized so
/// they total 1. Text with no word tokens scores all zeros.
pub struct LexiconSentimentScorer;

impl SentimentScorer for LexiconSentimentScorer {
    fn polarity(&self, text: &str) -> Result<PolarityScores, NlpError> {
        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut neutral = 0.0;

        let lower = text.to_lowercase();
        for token in lower
            .split(|ch: char| !ch.is_alphanumeric() && ch != '\'')
            .filter(|token| !token.is_empty())
        {
            match valence(token) {
                Some(value) if value > 0.0 => positive += value + 1.0,
                Some(value) if value < 0.0 => negative += -value + 1.0,
                _ => neutral += 1.0,
            }
        }

        let total = positive + negative + neutral;
        if total == 0.0 {
            return Ok(PolarityScores {
                positive: 0.0,
                negative: 0.0,
                neutral: 0.0,
            });
        }

        Ok(PolarityScores {
            positive: positive / total,
            negative: negative / total,
            neutral: neutral / total,
        })
    }
}

fn valence(token: &str) -> Option<f64> {
    LEXICON
        .binary_search_by(|(word, _)| word.cmp(&token))
        .ok()
        .map(|index| LEXICON[index].1)
}
