use serde::{Deserialize, Serialize};

/// The five rubric dimensions. Serialized labels embed each
/// dimension's nominal weight so rendered reports are
/// self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "Content (40%)")]
    Content,
    #[serde(rename = "Speed (10%)")]
    Speed,
    #[serde(rename = "Grammar (20%)")]
    Grammar,
    #[serde(rename = "Clarity (15%)")]
    Clarity,
    #[serde(rename = "Engagement (15%)")]
    Engagement,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Content,
        Dimension::Speed,
        Dimension::Grammar,
        Dimension::Clarity,
        Dimension::Engagement,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Content => "Content (40%)",
            Dimension::Speed => "Speed (10%)",
            Dimension::Grammar => "Grammar (20%)",
            Dimension::Clarity => "Clarity (15%)",
            Dimension::Engagement => "Engagement (15%)",
        }
    }

    pub const fn max_points(self) -> u8 {
        match self {
            Dimension::Content => 40,
            Dimension::Speed => 10,
            Dimension::Grammar => 20,
            Dimension::Clarity => 15,
            Dimension::Engagement => 15,
        }
    }
}

/// Discrete contribution of one dimension, carrying the reader-facing
/// feedback lines. Only the content dimension populates the coverage
/// log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub points: u8,
    pub feedback: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coverage_log: Vec<String>,
}

/// Evaluation output: the composite total plus the per-dimension
/// trail, in fixed rubric order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total: u8,
    pub dimensions: Vec<DimensionScore>,
}

impl ScoreReport {
    /// The total is always the exact sum of the dimension values; each
    /// dimension is capped by its own scoring rules, so the sum stays
    /// within 0..=100.
    pub(crate) fn assemble(dimensions: Vec<DimensionScore>) -> Self {
        let total = dimensions
            .iter()
            .map(|entry| u32::from(entry.points))
            .sum::<u32>() as u8;
        Self { total, dimensions }
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions
            .iter()
            .find(|entry| entry.dimension == dimension)
    }
}
