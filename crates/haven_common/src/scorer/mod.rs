//! Polarity scorers.
//!
//! The normalizer treats a scorer as a black box: text in, [`RawScores`]
//! out. One scorer instance is built at startup and shared by every
//! request, so implementations must be immutable after construction.

mod lexicon;
mod lexicon_data;

pub use lexicon::LexiconScorer;

use crate::error::ScorerError;
use crate::scores::RawScores;
use std::sync::Arc;

/// Source of polarity scores for a text
pub trait PolarityScorer: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Score a non-empty, trimmed text.
    fn polarity_scores(&self, text: &str) -> Result<RawScores, ScorerError>;
}

/// Process-wide scorer handle
pub type SharedScorer = Arc<dyn PolarityScorer>;
