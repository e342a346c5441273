use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::{EmbeddingEncoder, NlpError};

const EMBEDDING_DIM: usize = 256;
const UNIGRAM_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

/// Deterministic sentence encoder: lowercased word unigrams plus
/// character trigrams, hashed into a fixed-dimension vector and
/// L2-normalized. Texts with no word content encode to the zero
/// vector, which compares as 0.0 similarity against everything.
pub struct HashedNgramEncoder {
    dim: usize,
}

impl HashedNgramEncoder {
    pub fn new() -> Self {
        Self { dim: EMBEDDING_DIM }
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dim];
        let lower = text.to_lowercase();

        for token in lower
            .split(|ch: char| !ch.is_alphanumeric() && ch != '\'')
            .filter(|token| !token.is_empty())
        {
            bump(&mut vector, token, UNIGRAM_WEIGHT);

            let chars: Vec<char> = token.chars().collect();
            for window in chars.windows(3) {
                let gram: String = window.iter().collect();
                bump(&mut vector, &gram, TRIGRAM_WEIGHT);
            }
        }

        let norm = vector.iter().map(|value| value * value).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

impl Default for HashedNgramEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddingEncoder for HashedNgramEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, NlpError> {
        Ok(texts.iter().map(|text| self.embed(text)).collect())
    }
}

fn bump(vector: &mut [f32], feature: &str, weight: f32) {
    let mut hasher = DefaultHasher::new();
    feature.hash(&mut hasher);
    let slot = (hasher.finish() % vector.len() as u64) as usize;
    vector[slot] += weight;
}

/// Normalized dot-product similarity. Degenerate inputs (length
/// mismatch, zero norm) compare as 0.0 rather than erroring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|value| value * value).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|value| value * value).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
