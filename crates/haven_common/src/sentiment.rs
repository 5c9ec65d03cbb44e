//! Three-way sentiment label derived from a compound polarity score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound scores at or above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classify an unrounded compound score.
    ///
    /// Both boundaries belong to their non-neutral label; the open band
    /// between them is neutral. NaN has no ordering and lands in neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
