//! Response normalizer.
//!
//! Turns texts into labeled, rounded [`AnalysisResult`]s using the shared
//! polarity scorer. The same trim, score, classify and round pipeline runs
//! for single texts and for every batch item.

use crate::api::{BatchTexts, TextInput};
use crate::error::ClassifyError;
use crate::result::{AnalysisResult, BatchAnalysis, BatchItemResult};
use crate::scorer::SharedScorer;
use crate::sentiment::Sentiment;
use tracing::{debug, info};

/// Characters of input echoed in the per-request log line
const LOG_PREVIEW_CHARS: usize = 50;

/// Classifies texts with a shared scorer
#[derive(Clone)]
pub struct Normalizer {
    scorer: SharedScorer,
}

impl Normalizer {
    pub fn new(scorer: SharedScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Classify one text.
    ///
    /// Fails with [`ClassifyError::EmptyText`] when nothing is left after
    /// trimming, and with [`ClassifyError::Internal`] when the scorer fails
    /// or returns scores outside their ranges.
    pub fn classify(&self, text: &str) -> Result<AnalysisResult, ClassifyError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ClassifyError::EmptyText);
        }

        let (result, compound) = self.analyze(trimmed)?;
        info!(
            "Analyzed text: '{}...' - Sentiment: {} (score: {:.3})",
            preview(&result.text),
            result.sentiment,
            compound
        );
        Ok(result)
    }

    /// Classify a request field that may not be a string at all.
    pub fn classify_input(&self, input: &TextInput) -> Result<AnalysisResult, ClassifyError> {
        match input.as_str() {
            Some(text) => self.classify(text),
            None => Err(ClassifyError::InvalidInput),
        }
    }

    /// Classify every text of a batch, keeping input order.
    ///
    /// Items that are not strings or are blank become `{index, error}`
    /// records; they never fail the batch. Only a `texts` value that is not
    /// a list, or a scorer failure, fails the whole call.
    pub fn classify_batch(&self, texts: &BatchTexts) -> Result<BatchAnalysis, ClassifyError> {
        let items = match texts {
            BatchTexts::List(items) => items,
            BatchTexts::Other(_) => return Err(ClassifyError::InvalidBatchShape),
        };

        let mut results = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let trimmed = item.as_str().map(str::trim).filter(|t| !t.is_empty());
            let Some(text) = trimmed else {
                debug!("Batch item {} is not a usable text", index);
                results.push(BatchItemResult::Failed {
                    index,
                    error: ClassifyError::InvalidInput.to_string(),
                });
                continue;
            };

            let (result, _) = self.analyze(text)?;
            results.push(BatchItemResult::Analyzed { index, result });
        }

        info!("Batch analyzed {} texts", items.len());

        Ok(BatchAnalysis {
            total: items.len(),
            results,
        })
    }

    /// Score an already trimmed, non-empty text.
    ///
    /// Returns the result together with the unrounded compound score.
    fn analyze(&self, trimmed: &str) -> Result<(AnalysisResult, f64), ClassifyError> {
        let raw = self.scorer.polarity_scores(trimmed)?;
        raw.validate()?;

        let sentiment = Sentiment::from_compound(raw.compound);
        let scores = raw.rounded();

        Ok((
            AnalysisResult {
                text: trimmed.to_string(),
                sentiment,
                score: scores.compound,
                scores,
            },
            raw.compound,
        ))
    }
}

/// First characters of a text, cut on a char boundary
fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScorerError;
    use crate::scorer::PolarityScorer;
    use crate::scores::RawScores;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Returns fixed scores and counts calls
    struct FixedScorer {
        scores: RawScores,
        calls: AtomicUsize,
    }

    impl FixedScorer {
        fn new(compound: f64) -> Self {
            Self {
                scores: RawScores::new(0.3456, 0.6544, 0.0, compound),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl PolarityScorer for FixedScorer {
        fn name(&self) -> &str {
            "fixed"
        }

        fn polarity_scores(&self, _text: &str) -> Result<RawScores, ScorerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.scores)
        }
    }

    /// Scores by keyword so batch tests can mix polarities
    struct KeywordScorer;

    impl PolarityScorer for KeywordScorer {
        fn name(&self) -> &str {
            "keyword"
        }

        fn polarity_scores(&self, text: &str) -> Result<RawScores, ScorerError> {
            if text.contains("boom") {
                return Err(ScorerError::Failed("boom".to_string()));
            }
            let compound = if text.contains("good") {
                0.6
            } else if text.contains("bad") {
                -0.6
            } else {
                0.0
            };
            Ok(RawScores::new(0.0, 1.0, 0.0, compound))
        }
    }

    fn normalizer_with(scorer: impl PolarityScorer + 'static) -> Normalizer {
        Normalizer::new(Arc::new(scorer))
    }

    #[test]
    fn test_classify_trims_and_rounds() {
        let normalizer = normalizer_with(FixedScorer::new(0.84567));
        let result = normalizer.classify("  lovely place \n").unwrap();

        assert_eq!(result.text, "lovely place");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.score, 0.846);
        assert_eq!(result.scores, RawScores::new(0.346, 0.654, 0.0, 0.846));
    }

    #[test]
    fn test_classify_uses_unrounded_compound() {
        // Displays as 0.05 but sits inside the neutral band
        let result = normalizer_with(FixedScorer::new(0.0496)).classify("meh").unwrap();
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.score, 0.05);

        let result = normalizer_with(FixedScorer::new(-0.05)).classify("meh").unwrap();
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_empty_text_skips_scorer() {
        let scorer = Arc::new(FixedScorer::new(0.5));
        let normalizer = Normalizer::new(scorer.clone());

        assert_eq!(normalizer.classify("   \t\n"), Err(ClassifyError::EmptyText));
        assert_eq!(normalizer.classify(""), Err(ClassifyError::EmptyText));
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_classify_input_rejects_non_strings() {
        let normalizer = normalizer_with(KeywordScorer);
        assert_eq!(
            normalizer.classify_input(&TextInput::Other(json!(12))),
            Err(ClassifyError::InvalidInput)
        );
        assert!(normalizer.classify_input(&TextInput::from("good")).is_ok());
    }

    #[test]
    fn test_out_of_range_scores_are_internal_errors() {
        let normalizer = normalizer_with(FixedScorer::new(1.7));
        match normalizer.classify("anything") {
            Err(ClassifyError::Internal(msg)) => assert!(msg.contains("compound")),
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[test]
    fn test_scorer_failure_is_internal_error() {
        let normalizer = normalizer_with(KeywordScorer);
        assert!(matches!(
            normalizer.classify("boom"),
            Err(ClassifyError::Internal(_))
        ));
    }

    #[test]
    fn test_batch_preserves_order_and_marks_invalid_items() {
        let normalizer = normalizer_with(KeywordScorer);
        let texts = BatchTexts::List(vec![
            TextInput::from("good stay"),
            TextInput::from(""),
            TextInput::from("  bad stay  "),
            TextInput::Other(json!(7)),
            TextInput::Other(serde_json::Value::Null),
            TextInput::from("plain"),
        ]);

        let batch = normalizer.classify_batch(&texts).unwrap();
        assert_eq!(batch.total, 6);
        assert_eq!(batch.results.len(), 6);
        for (i, item) in batch.results.iter().enumerate() {
            assert_eq!(item.index(), i);
        }

        assert_eq!(
            batch.results[0].analysis().map(|r| r.sentiment),
            Some(Sentiment::Positive)
        );
        assert!(batch.results[1].is_error());
        let bad = batch.results[2].analysis().unwrap();
        assert_eq!(bad.text, "bad stay");
        assert_eq!(bad.sentiment, Sentiment::Negative);
        assert!(batch.results[3].is_error());
        assert!(batch.results[4].is_error());
        assert_eq!(
            batch.results[5].analysis().map(|r| r.sentiment),
            Some(Sentiment::Neutral)
        );

        match &batch.results[1] {
            BatchItemResult::Failed { error, .. } => assert_eq!(error, "Invalid text input"),
            other => panic!("expected error record, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_rejects_non_list() {
        let normalizer = normalizer_with(KeywordScorer);
        assert_eq!(
            normalizer.classify_batch(&BatchTexts::Other(json!("not a list"))),
            Err(ClassifyError::InvalidBatchShape)
        );
        assert_eq!(
            normalizer.classify_batch(&BatchTexts::Other(json!({"a": 1}))),
            Err(ClassifyError::InvalidBatchShape)
        );
    }

    #[test]
    fn test_empty_batch() {
        let normalizer = normalizer_with(KeywordScorer);
        let batch = normalizer.classify_batch(&BatchTexts::List(vec![])).unwrap();
        assert_eq!(batch.total, 0);
        assert!(batch.results.is_empty());
    }

    #[test]
    fn test_batch_scorer_failure_fails_call() {
        let normalizer = normalizer_with(KeywordScorer);
        let texts = BatchTexts::from_strs(&["good", "boom"]);
        assert!(matches!(
            normalizer.classify_batch(&texts),
            Err(ClassifyError::Internal(_))
        ));
    }

    #[test]
    fn test_preview_cuts_on_chars() {
        let text = "é".repeat(60);
        assert_eq!(preview(&text).chars().count(), 50);
        assert_eq!(preview("short"), "short");
    }
}
