//! Clarity: transitions and sentence-length balance

use crate::error::Result;
use crate::processing::lexicon::PhraseSet;
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClarityAnalysis {
    pub clarity_score: f64,
    pub has_structure: bool,
    pub transition_words: usize,
    pub avg_sentence_length: f64,
}

pub struct ClarityScorer {
    transitions: PhraseSet,
}

impl ClarityScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            transitions: PhraseSet::new(
                "transitions",
                &[
                    "first", "second", "then", "next", "finally", "additionally", "moreover",
                    "however", "therefore", "consequently",
                ],
            )?,
        })
    }

    pub fn score(&self, processor: &TextProcessor, text: &str) -> ClarityAnalysis {
        let lowered = text.to_lowercase();

        // Each transition word counts once however often it appears.
        let transition_words = self.transitions.distinct_matches(&lowered);

        let mut clarity_score = 60.0;
        clarity_score += (transition_words as f64 * 8.0).min(24.0);

        let avg_sentence_length = processor.average_sentence_length(text);
        if avg_sentence_length > 10.0 && avg_sentence_length < 25.0 {
            clarity_score += 16.0;
        } else if avg_sentence_length < 5.0 {
            clarity_score -= 10.0;
        }

        ClarityAnalysis {
            clarity_score: clarity_score.clamp(0.0, 100.0),
            has_structure: transition_words > 0,
            transition_words,
            avg_sentence_length,
        }
    }
}
