//! Lexical relevance of an answer to its question

use crate::processing::round_to;
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};

/// Score used when the question carries no content words to compare against.
const NO_QUESTION_SCORE: f64 = 50.0;
const DIRECT_ANSWER_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelevanceAnalysis {
    pub relevance_score: f64,
    pub keyword_overlap: usize,
    pub directly_addresses_question: bool,
}

pub struct RelevanceScorer {
    boost: f64,
}

impl RelevanceScorer {
    pub fn new(boost: f64) -> Self {
        Self { boost }
    }

    pub fn score(&self, processor: &TextProcessor, answer: &str, question: &str) -> RelevanceAnalysis {
        let answer_words = processor.content_word_set(answer);
        let question_words = processor.content_word_set(question);

        let overlap = answer_words.intersection(&question_words).count();

        let raw = if question_words.is_empty() {
            NO_QUESTION_SCORE
        } else {
            overlap as f64 / question_words.len() as f64 * 100.0
        };
        let relevance = (raw * self.boost).clamp(0.0, 100.0);

        RelevanceAnalysis {
            relevance_score: round_to(relevance, 1),
            keyword_overlap: overlap,
            directly_addresses_question: overlap as f64 >= question_words.len() as f64 * DIRECT_ANSWER_RATIO,
        }
    }
}
