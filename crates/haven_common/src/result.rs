//! Result records returned to API clients.

use crate::scores::RawScores;
use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};

/// Labeled, rounded analysis of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Trimmed input text
    pub text: String,
    /// Label from the unrounded compound score
    pub sentiment: Sentiment,
    /// Compound score rounded for display
    pub score: f64,
    /// All raw scores rounded for display
    pub scores: RawScores,
}

/// One entry of a batch response, at the same position as its input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchItemResult {
    Analyzed {
        index: usize,
        #[serde(flatten)]
        result: AnalysisResult,
    },
    Failed {
        index: usize,
        error: String,
    },
}

impl BatchItemResult {
    pub fn index(&self) -> usize {
        match self {
            BatchItemResult::Analyzed { index, .. } | BatchItemResult::Failed { index, .. } => {
                *index
            }
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match self {
            BatchItemResult::Analyzed { result, .. } => Some(result),
            BatchItemResult::Failed { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, BatchItemResult::Failed { .. })
    }
}

/// Batch response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub results: Vec<BatchItemResult>,
    /// Number of inputs, including the ones that failed
    pub total: usize,
}
