//! # Lexicon Scorer
//!
//! Valence-lexicon, rule-based polarity scoring.
//!
//! Each known word contributes its valence, adjusted by the words around
//! it:
//! - boosters and dampeners in the three preceding tokens
//! - negations in the three preceding tokens
//! - ALL-CAPS emphasis when only part of the text is shouted
//! - a contrastive "but" that shifts weight to the second clause
//! - trailing `!` and repeated `?`
//!
//! The summed valence is squashed into a compound score in [-1, 1], and the
//! positive/negative/neutral masses become proportions that sum to one.

use super::lexicon_data::{BOOSTERS, NEGATIONS, VALENCES};
use super::PolarityScorer;
use crate::error::ScorerError;
use crate::scores::RawScores;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static BOOSTER_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| BOOSTERS.iter().copied().collect());

static NEGATION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIONS.iter().copied().collect());

/// Added to a shouted sentiment word (or booster) when caps are mixed
const CAPS_INCR: f64 = 0.733;

/// Multiplier for a negated valence
const NEGATION_SCALAR: f64 = -0.74;

/// Approximates the maximum expected summed valence
const NORMALIZE_ALPHA: f64 = 15.0;

const EXCLAIM_STEP: f64 = 0.292;
const EXCLAIM_MAX: usize = 4;
const QUESTION_STEP: f64 = 0.18;
const QUESTION_MAX: f64 = 0.96;

const BUT_BEFORE_WEIGHT: f64 = 0.5;
const BUT_AFTER_WEIGHT: f64 = 1.5;

/// Rule-based scorer over a word valence lexicon
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create a scorer with the built-in lexicon
    pub fn new() -> Self {
        let valences = VALENCES
            .iter()
            .map(|(word, valence)| (word.to_string(), *valence))
            .collect();
        Self { valences }
    }

    /// Add or override a word before the scorer is shared
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.valences.insert(word.to_lowercase(), valence);
        self
    }

    /// Valence of a word, if it is in the lexicon
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    /// Number of lexicon entries
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    fn score_text(&self, text: &str) -> RawScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return RawScores::default();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps_differ = caps_differential(&tokens);

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| self.token_valence(&tokens, &lowered, i, caps_differ))
            .collect();

        apply_but_rule(&lowered, &mut sentiments);

        polarity_from(&sentiments, punctuation_emphasis(text))
    }

    fn token_valence(&self, tokens: &[&str], lowered: &[String], i: usize, caps_differ: bool) -> f64 {
        let word = lowered[i].as_str();

        if BOOSTER_MAP.contains_key(word) {
            return 0.0;
        }
        if word == "kind" && lowered.get(i + 1).map(String::as_str) == Some("of") {
            return 0.0;
        }

        let Some(mut valence) = self.valences.get(word).copied() else {
            return 0.0;
        };

        // "no" right before another sentiment word only negates that word
        if word == "no" && lowered.get(i + 1).is_some_and(|next| self.valences.contains_key(next)) {
            return 0.0;
        }
        let preceded_by_no = (i > 0 && lowered[i - 1] == "no")
            || (i > 1 && lowered[i - 2] == "no")
            || (i > 2 && lowered[i - 3] == "no" && matches!(lowered[i - 1].as_str(), "or" | "nor"));
        if preceded_by_no {
            valence *= NEGATION_SCALAR;
        }

        if caps_differ && is_shouting(tokens[i]) {
            if valence > 0.0 {
                valence += CAPS_INCR;
            } else {
                valence -= CAPS_INCR;
            }
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prev = lowered[i - distance].as_str();
            if self.valences.contains_key(prev) {
                continue;
            }

            let mut scalar = booster_scalar(tokens[i - distance], prev, valence, caps_differ);
            match distance {
                2 => scalar *= 0.95,
                3 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = negation_check(valence, lowered, distance, i);
        }

        self.least_check(valence, lowered, i)
    }

    /// "least good" reads as negative, "at least good" does not
    fn least_check(&self, valence: f64, lowered: &[String], i: usize) -> f64 {
        if i == 0 || lowered[i - 1] != "least" || self.valences.contains_key("least") {
            return valence;
        }
        if i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very") {
            return valence;
        }
        valence * NEGATION_SCALAR
    }
}

impl PolarityScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity_scores(&self, text: &str) -> Result<RawScores, ScorerError> {
        Ok(self.score_text(text))
    }
}

/// Split on whitespace and strip surrounding punctuation from words.
///
/// Tokens that would shrink to two characters or fewer are kept as-is so
/// emoticons like `:)` and `<3` survive.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .collect()
}

/// True when the token has letters and none of them are lowercase
fn is_shouting(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// Caps only carry emphasis when some, but not all, tokens are shouted
fn caps_differential(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|t| is_shouting(t)).count();
    shouted > 0 && shouted < tokens.len()
}

fn is_negated(word: &str) -> bool {
    NEGATION_SET.contains(word) || word.contains("n't")
}

fn booster_scalar(token: &str, lowered: &str, valence: f64, caps_differ: bool) -> f64 {
    let Some(&step) = BOOSTER_MAP.get(lowered) else {
        return 0.0;
    };

    let mut scalar = if valence < 0.0 { -step } else { step };
    if caps_differ && is_shouting(token) {
        if valence > 0.0 {
            scalar += CAPS_INCR;
        } else {
            scalar -= CAPS_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lowered: &[String], distance: usize, i: usize) -> f64 {
    let word_at = |d: usize| lowered[i - d].as_str();
    let is_so_or_this = |w: &str| matches!(w, "so" | "this");

    match distance {
        1 => {
            if is_negated(word_at(1)) {
                return valence * NEGATION_SCALAR;
            }
        }
        2 => {
            if word_at(2) == "never" && is_so_or_this(word_at(1)) {
                return valence * 1.25;
            }
            if word_at(2) == "without" && word_at(1) == "doubt" {
                return valence;
            }
            if is_negated(word_at(2)) {
                return valence * NEGATION_SCALAR;
            }
        }
        3 => {
            if word_at(3) == "never" && (is_so_or_this(word_at(2)) || is_so_or_this(word_at(1))) {
                return valence * 1.25;
            }
            if word_at(3) == "without" && (word_at(2) == "doubt" || word_at(1) == "doubt") {
                return valence;
            }
            if is_negated(word_at(3)) {
                return valence * NEGATION_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Halve everything before the first "but" and boost everything after it
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lowered.iter().position(|w| w == "but") else {
        return;
    };

    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < but_index {
            *sentiment *= BUT_BEFORE_WEIGHT;
        } else if index > but_index {
            *sentiment *= BUT_AFTER_WEIGHT;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.matches('!').count().min(EXCLAIM_MAX);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_STEP,
        _ => QUESTION_MAX,
    };

    exclaims as f64 * EXCLAIM_STEP + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn polarity_from(sentiments: &[f64], emphasis: f64) -> RawScores {
    if sentiments.is_empty() {
        return RawScores::default();
    }

    let total: f64 = sentiments.iter().sum();
    let compound = if total > 0.0 {
        normalize(total + emphasis)
    } else if total < 0.0 {
        normalize(total - emphasis)
    } else {
        0.0
    };

    let mut positive_mass = 0.0;
    let mut negative_mass = 0.0;
    let mut neutral_count = 0usize;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            positive_mass += sentiment + 1.0;
        } else if sentiment < 0.0 {
            negative_mass += sentiment - 1.0;
        } else {
            neutral_count += 1;
        }
    }

    if positive_mass > negative_mass.abs() {
        positive_mass += emphasis;
    } else if positive_mass < negative_mass.abs() {
        negative_mass -= emphasis;
    }

    let denominator = positive_mass + negative_mass.abs() + neutral_count as f64;
    if denominator == 0.0 {
        return RawScores::new(0.0, 0.0, 0.0, compound);
    }

    RawScores::new(
        (positive_mass / denominator).abs(),
        (neutral_count as f64 / denominator).abs(),
        (negative_mass / denominator).abs(),
        compound,
    )
}
