//! HostelHaven common library - sentiment model, scorer and response normalization.
//!
//! Shared by the `havend` daemon and its tests.

pub mod api;
pub mod error;
pub mod normalizer;
pub mod result;
pub mod rounding;
pub mod scorer;
pub mod scores;
pub mod sentiment;

pub use api::{
    AnalyzeRequest, BatchAnalyzeRequest, BatchTexts, ErrorResponse, HealthResponse, TextInput,
    SERVICE_NAME,
};
pub use error::{ClassifyError, ScorerError};
pub use normalizer::Normalizer;
pub use result::{AnalysisResult, BatchAnalysis, BatchItemResult};
pub use rounding::{round_to, DISPLAY_PLACES};
pub use scorer::{LexiconScorer, PolarityScorer, SharedScorer};
pub use scores::RawScores;
pub use sentiment::{Sentiment, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
