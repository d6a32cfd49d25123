//! Sentiment and confidence scoring
//!
//! The scorer consumes a [`SentimentSignal`] from any [`SentimentModel`]. The
//! bundled [`LexiconSentimentModel`] is a word-valence lexicon used when no
//! external model is plugged in.

use crate::processing::round_to;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Raw output of a sentiment model for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSignal {
    /// Proportion of positive signal, `positive + negative + neutral ~= 1.0`
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    /// In [-1, 1]
    pub polarity: f64,
    /// In [0, 1]
    pub subjectivity: f64,
}

impl SentimentSignal {
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

pub trait SentimentModel: Send + Sync {
    fn polarity_scores(&self, text: &str) -> SentimentSignal;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub polarity: f64,
    pub subjectivity: f64,
    pub positive_score: f64,
    pub negative_score: f64,
    pub neutral_score: f64,
    pub confidence_level: f64,
    pub enthusiasm_score: f64,
}

pub struct SentimentScorer {
    model: Box<dyn SentimentModel>,
}

impl SentimentScorer {
    pub fn new(model: Box<dyn SentimentModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn score(&self, text: &str) -> SentimentAnalysis {
        let signal = self.model.polarity_scores(text);
        Self::from_signal(&signal)
    }

    pub fn from_signal(signal: &SentimentSignal) -> SentimentAnalysis {
        let confidence = (50.0 + signal.positive * 50.0 - signal.negative * 30.0).clamp(0.0, 100.0);

        SentimentAnalysis {
            polarity: round_to(signal.polarity, 3),
            subjectivity: round_to(signal.subjectivity, 3),
            positive_score: round_to(signal.positive, 3),
            negative_score: round_to(signal.negative, 3),
            neutral_score: round_to(signal.neutral, 3),
            confidence_level: round_to(confidence, 1),
            enthusiasm_score: round_to(signal.positive * 100.0, 1),
        }
    }
}

/// Dampening applied to a word's valence when a negator precedes it.
const NEGATION_SCALAR: f64 = 0.74;
const NEGATION_WINDOW: usize = 3;

pub struct LexiconSentimentModel {
    lexicon: HashMap<&'static str, (f64, f64)>,
}

impl Default for LexiconSentimentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentimentModel {
    pub fn new() -> Self {
        Self {
            lexicon: VALENCE_LEXICON
                .iter()
                .map(|&(word, valence, subjectivity)| (word, (valence, subjectivity)))
                .collect(),
        }
    }

    fn is_negator(token: &str) -> bool {
        matches!(token, "not" | "no" | "never" | "cannot" | "nothing" | "nobody" | "neither" | "nor")
            || token.ends_with("n't")
            || token.ends_with("n’t")
    }

    fn negated(tokens: &[String], index: usize) -> bool {
        let start = index.saturating_sub(NEGATION_WINDOW);
        tokens[start..index].iter().any(|t| Self::is_negator(t))
    }
}

impl SentimentModel for LexiconSentimentModel {
    fn polarity_scores(&self, text: &str) -> SentimentSignal {
        let tokens: Vec<String> = text.unicode_words().map(|w| w.to_lowercase()).collect();
        if tokens.is_empty() {
            return SentimentSignal::neutral();
        }

        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut neutral_count = 0.0;
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        for (index, token) in tokens.iter().enumerate() {
            match self.lexicon.get(token.as_str()) {
                Some(&(valence, subjectivity)) => {
                    let valence = if Self::negated(&tokens, index) {
                        -valence * NEGATION_SCALAR
                    } else {
                        valence
                    };

                    if valence > 0.0 {
                        positive_sum += valence;
                    } else {
                        negative_sum += -valence;
                    }
                    polarity_sum += valence;
                    subjectivity_sum += subjectivity;
                    hits += 1;
                }
                None => neutral_count += 1.0,
            }
        }

        let total = positive_sum + negative_sum + neutral_count;
        if total <= 0.0 {
            return SentimentSignal::neutral();
        }
        let (polarity, subjectivity) = if hits == 0 {
            (0.0, 0.0)
        } else {
            (
                (polarity_sum / hits as f64).clamp(-1.0, 1.0),
                (subjectivity_sum / hits as f64).clamp(0.0, 1.0),
            )
        };

        SentimentSignal {
            positive: positive_sum / total,
            negative: negative_sum / total,
            neutral: neutral_count / total,
            polarity,
            subjectivity,
        }
    }

    fn name(&self) -> &str {
        "valence-lexicon"
    }
}

// (word, valence in [-1, 1], subjectivity in [0, 1])
const VALENCE_LEXICON: &[(&str, f64, f64)] = &[
    ("excellent", 1.0, 1.0),
    ("outstanding", 0.9, 0.9),
    ("amazing", 0.8, 0.9),
    ("great", 0.8, 0.75),
    ("fantastic", 0.8, 0.9),
    ("wonderful", 0.8, 1.0),
    ("awesome", 0.8, 1.0),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("passionate", 0.5, 0.8),
    ("excited", 0.5, 0.8),
    ("exciting", 0.5, 0.8),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("proud", 0.6, 1.0),
    ("good", 0.7, 0.6),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("successful", 0.75, 0.95),
    ("success", 0.6, 0.5),
    ("successfully", 0.75, 0.95),
    ("confident", 0.5, 0.8),
    ("effective", 0.6, 0.8),
    ("efficient", 0.5, 0.6),
    ("strong", 0.4, 0.7),
    ("positive", 0.2, 0.5),
    ("helpful", 0.4, 0.5),
    ("improved", 0.4, 0.3),
    ("achieved", 0.4, 0.3),
    ("win", 0.6, 0.4),
    ("won", 0.6, 0.4),
    ("rewarding", 0.6, 0.7),
    ("valuable", 0.5, 0.6),
    ("reliable", 0.4, 0.5),
    ("innovative", 0.5, 0.7),
    ("motivated", 0.4, 0.6),
    ("eager", 0.3, 0.6),
    ("thrilled", 0.7, 0.9),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("hate", -0.8, 0.9),
    ("hated", -0.8, 0.9),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("frustrated", -0.7, 0.8),
    ("frustrating", -0.7, 0.8),
    ("difficult", -0.5, 1.0),
    ("hard", -0.3, 0.5),
    ("failed", -0.5, 0.3),
    ("failure", -0.6, 0.3),
    ("fail", -0.5, 0.3),
    ("problem", -0.3, 0.2),
    ("problems", -0.3, 0.2),
    ("mistake", -0.5, 0.4),
    ("mistakes", -0.5, 0.4),
    ("worried", -0.5, 0.8),
    ("nervous", -0.4, 0.8),
    ("stressful", -0.5, 0.8),
    ("struggled", -0.4, 0.5),
    ("confusing", -0.4, 0.7),
    ("boring", -0.6, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("weak", -0.4, 0.6),
    ("wrong", -0.5, 0.9),
];
