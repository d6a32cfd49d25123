//! Tokenization and basic text metrics

use crate::processing::round_to;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Word and sentence segmentation plus the English stop-word set.
pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub content_word_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub unique_words: usize,
    pub vocabulary_richness: f64,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Lowercased tokens split on Unicode word boundaries.
    ///
    /// Punctuation marks are tokens of their own and count towards word and
    /// sentence-length totals; only whitespace is dropped.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .map(|token| token.to_lowercase())
            .collect()
    }

    /// Split text into trimmed, non-empty sentences
    pub fn sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Alphabetic, non-stop-word tokens in order of appearance.
    pub fn content_words(&self, text: &str) -> Vec<String> {
        self.words(text)
            .into_iter()
            .filter(|w| self.is_content_word(w))
            .collect()
    }

    pub fn content_word_set(&self, text: &str) -> HashSet<String> {
        self.content_words(text).into_iter().collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn is_content_word(&self, word: &str) -> bool {
        is_alphabetic(word) && !self.is_stop_word(word)
    }

    /// Words per sentence, 0 when the text has no sentences.
    pub fn average_sentence_length(&self, text: &str) -> f64 {
        let sentences = self.sentences(text).len();
        if sentences == 0 {
            0.0
        } else {
            self.words(text).len() as f64 / sentences as f64
        }
    }

    pub fn metrics(&self, text: &str) -> TextMetrics {
        let words = self.words(text);
        let sentences = self.sentences(text);
        let content_words: Vec<&String> = words.iter().filter(|w| self.is_content_word(w)).collect();
        let unique: HashSet<&String> = content_words.iter().copied().collect();

        let avg_word_length = if content_words.is_empty() {
            0.0
        } else {
            content_words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / content_words.len() as f64
        };

        let avg_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            words.len() as f64 / sentences.len() as f64
        };

        let vocabulary_richness = if content_words.is_empty() {
            0.0
        } else {
            unique.len() as f64 / content_words.len() as f64
        };

        TextMetrics {
            word_count: words.len(),
            sentence_count: sentences.len(),
            content_word_count: content_words.len(),
            avg_word_length: round_to(avg_word_length, 2),
            avg_sentence_length: round_to(avg_sentence_length, 2),
            unique_words: unique.len(),
            vocabulary_richness: round_to(vocabulary_richness, 3),
        }
    }
}

pub(crate) fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him",
    "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its",
    "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who",
    "whom", "this", "that", "that'll", "these", "those", "am", "is", "are", "was",
    "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did",
    "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
    "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should",
    "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't",
    "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenization_keeps_punctuation() {
        let processor = TextProcessor::new();
        let words = processor.words("Hello, World! Rust is great.");

        assert_eq!(words, vec!["hello", ",", "world", "!", "rust", "is", "great", "."]);
    }

    #[test]
    fn test_punctuated_sentence_word_count() {
        let processor = TextProcessor::new();
        let metrics = processor.metrics("First, I fixed the cache, then I shipped it.");

        assert_eq!(metrics.word_count, 12);
        assert_eq!(metrics.sentence_count, 1);
        assert_eq!(metrics.avg_sentence_length, 12.0);
        // first, fixed, cache, shipped
        assert_eq!(metrics.content_word_count, 4);
    }

    #[test]
    fn test_contractions_stay_whole() {
        let processor = TextProcessor::new();

        assert_eq!(processor.words("I don't know"), vec!["i", "don't", "know"]);
    }

    #[test]
    fn test_sentence_split() {
        let processor = TextProcessor::new();
        let sentences = processor.sentences("I led the team. We shipped on time! Did it work?");

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1], "We shipped on time!");
    }

    #[test]
    fn test_content_words_exclude_stop_words_and_numbers() {
        let processor = TextProcessor::new();
        let words = processor.content_words("What is your experience with Python in 2024?");

        assert_eq!(words, vec!["experience", "python"]);
    }

    #[test]
    fn test_metrics() {
        let processor = TextProcessor::new();
        let metrics = processor.metrics("Rust rust safety. The compiler helps.");

        // two full stops are tokens too
        assert_eq!(metrics.word_count, 8);
        assert_eq!(metrics.sentence_count, 2);
        // rust, rust, safety, compiler, helps
        assert_eq!(metrics.content_word_count, 5);
        assert_eq!(metrics.unique_words, 4);
        assert_eq!(metrics.vocabulary_richness, 0.8);
        assert_eq!(metrics.avg_sentence_length, 4.0);
        assert_eq!(metrics.avg_word_length, 5.4);
    }

    #[test]
    fn test_metrics_without_content_words() {
        let processor = TextProcessor::new();
        let metrics = processor.metrics("It is what it is.");

        assert_eq!(metrics.content_word_count, 0);
        assert_eq!(metrics.avg_word_length, 0.0);
        assert_eq!(metrics.vocabulary_richness, 0.0);
    }
}
