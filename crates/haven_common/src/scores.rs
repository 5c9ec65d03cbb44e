//! Raw polarity scores produced by a scorer.

use crate::error::ScorerError;
use crate::rounding::round_display;
use serde::{Deserialize, Serialize};

/// Slack allowed on range checks for accumulated float error
const RANGE_TOLERANCE: f64 = 1e-9;

/// Polarity scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawScores {
    /// Fraction of positive sentiment (0 to 1)
    pub positive: f64,
    /// Fraction of neutral sentiment (0 to 1)
    pub neutral: f64,
    /// Fraction of negative sentiment (0 to 1)
    pub negative: f64,
    /// Aggregate polarity (-1 to 1)
    pub compound: f64,
}

impl RawScores {
    pub fn new(positive: f64, neutral: f64, negative: f64, compound: f64) -> Self {
        Self {
            positive,
            neutral,
            negative,
            compound,
        }
    }

    /// Check every field is finite and inside its documented range.
    pub fn validate(&self) -> Result<(), ScorerError> {
        let fractions = [
            ("positive", self.positive),
            ("neutral", self.neutral),
            ("negative", self.negative),
        ];
        for (name, value) in fractions {
            if !in_range(value, 0.0, 1.0) {
                return Err(ScorerError::OutOfRange(format!(
                    "{} = {} (expected 0..=1)",
                    name, value
                )));
            }
        }
        if !in_range(self.compound, -1.0, 1.0) {
            return Err(ScorerError::OutOfRange(format!(
                "compound = {} (expected -1..=1)",
                self.compound
            )));
        }
        Ok(())
    }

    /// Each field rounded independently to display precision.
    pub fn rounded(&self) -> Self {
        Self {
            positive: round_display(self.positive),
            neutral: round_display(self.neutral),
            negative: round_display(self.negative),
            compound: round_display(self.compound),
        }
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min - RANGE_TOLERANCE && value <= max + RANGE_TOLERANCE
}
