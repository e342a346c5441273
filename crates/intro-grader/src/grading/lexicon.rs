//! Fixed keyword tables the rubric matches against. Tagged enums keep
//! the topic set exhaustiveness-checkable instead of scattering string
//! tables through the scorers.

use serde::{Deserialize, Serialize};

/// The seven topics a complete self-introduction is expected to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Identity,
    Age,
    Education,
    Family,
    Hobbies,
    Ambition,
    Unique,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Identity,
        Topic::Age,
        Topic::Education,
        Topic::Family,
        Topic::Hobbies,
        Topic::Ambition,
        Topic::Unique,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Topic::Identity => "Identity",
            Topic::Age => "Age",
            Topic::Education => "Education",
            Topic::Family => "Family",
            Topic::Hobbies => "Hobbies",
            Topic::Ambition => "Ambition",
            Topic::Unique => "Unique",
        }
    }

    /// Trigger phrases checked as substrings of the lower-cased text.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Identity => &["name", "myself", "i am"],
            Topic::Age => &["years old", "age"],
            Topic::Education => &["school", "class", "study", "college"],
            Topic::Family => &["family", "mother", "father", "parents"],
            Topic::Hobbies => &["hobby", "play", "cricket", "reading", "enjoy"],
            Topic::Ambition => &["goal", "ambition", "dream", "become", "science", "engineer"],
            Topic::Unique => &["fact", "unique", "special", "secret"],
        }
    }

    /// Probe sentence encoded when no keyword hits; its similarity
    /// against the transcript's sentences decides semantic coverage.
    pub fn semantic_query(self) -> String {
        format!("My {} is", self.label())
    }
}

/// Greeting phrases that earn the salutation points.
pub const GREETINGS: &[&str] = &[
    "hello",
    "good morning",
    "good afternoon",
    "hi everyone",
    "myself",
    "hey",
];

/// Filler words counted against clarity. "you know" spans two word
/// tokens, so the per-token scan never counts it.
pub const FILLER_WORDS: &[&str] = &["um", "uh", "like", "you know", "actually", "basically"];
