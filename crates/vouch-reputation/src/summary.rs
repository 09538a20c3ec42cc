// crates/vouch-reputation/src/summary.rs
//
// Human-facing summary of a reputation result: category, confidence, and
// rounded opinion percentages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::ReputationResult;

/// Coarse trust category derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustCategory {
    /// Score 80 and above.
    #[serde(rename = "Highly Trusted")]
    HighlyTrusted,
    /// Score 60 to 79.
    #[serde(rename = "Trusted")]
    Trusted,
    /// Score 40 to 59.
    #[serde(rename = "Neutral")]
    Neutral,
    /// Score 20 to 39.
    #[serde(rename = "Low Trust")]
    LowTrust,
    /// Score below 20.
    #[serde(rename = "Untrusted")]
    Untrusted,
}

impl TrustCategory {
    /// Category for a 0-100 score.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => TrustCategory::HighlyTrusted,
            60..=79 => TrustCategory::Trusted,
            40..=59 => TrustCategory::Neutral,
            20..=39 => TrustCategory::LowTrust,
            _ => TrustCategory::Untrusted,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            TrustCategory::HighlyTrusted => "Highly Trusted",
            TrustCategory::Trusted => "Trusted",
            TrustCategory::Neutral => "Neutral",
            TrustCategory::LowTrust => "Low Trust",
            TrustCategory::Untrusted => "Untrusted",
        }
    }
}

impl fmt::Display for TrustCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display-ready view of a [`ReputationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Reputation score in [0, 100].
    pub score: u8,
    /// Category the score falls into.
    pub category: TrustCategory,
    /// round((1 - uncertainty) * 100).
    pub confidence: u8,
    /// Belief as a rounded percentage.
    pub belief: u8,
    /// Disbelief as a rounded percentage.
    pub disbelief: u8,
    /// Uncertainty as a rounded percentage.
    pub uncertainty: u8,
    /// Direct attestations plus trust paths used.
    pub total_evidence: usize,
}

/// Summarize a reputation result for display.
pub fn summarize(result: &ReputationResult) -> Summary {
    let o = &result.opinion;
    Summary {
        score: result.score,
        category: TrustCategory::from_score(result.score),
        confidence: percent(1.0 - o.uncertainty),
        belief: percent(o.belief),
        disbelief: percent(o.disbelief),
        uncertainty: percent(o.uncertainty),
        total_evidence: result.direct_count + result.transitive_count,
    }
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
