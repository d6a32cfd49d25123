//! Content quality: evidence markers and STAR structure

use crate::error::{InterviewScorerError, Result};
use crate::processing::lexicon::PhraseSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

const BASE_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentQuality {
    pub quality_score: f64,
    pub has_specific_examples: bool,
    pub has_quantifiable_results: bool,
    pub has_numbers: bool,
    pub star: StarIndicators,
    pub uses_star_method: bool,
}

/// Situation / Task / Action / Result keyword groups found in an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StarIndicators {
    pub situation: bool,
    pub task: bool,
    pub action: bool,
    pub result: bool,
}

impl StarIndicators {
    pub fn complete(&self) -> bool {
        self.situation && self.task && self.action && self.result
    }
}

pub struct ContentScorer {
    number_regex: Regex,
    examples: PhraseSet,
    quantification: PhraseSet,
    situation: PhraseSet,
    task: PhraseSet,
    action: PhraseSet,
    result: PhraseSet,
}

impl ContentScorer {
    pub fn new() -> Result<Self> {
        let number_regex = Regex::new(r"\d+")
            .map_err(|e| InterviewScorerError::Processing(format!("Invalid number regex: {}", e)))?;

        Ok(Self {
            number_regex,
            examples: PhraseSet::new(
                "examples",
                &["for example", "for instance", "such as", "like when", "specifically"],
            )?,
            quantification: PhraseSet::new(
                "quantification",
                &[
                    "increased", "decreased", "improved", "reduced", "achieved", "percent", "%",
                    "times", "doubled", "tripled",
                ],
            )?,
            situation: PhraseSet::new("situation", &["situation", "context", "background"])?,
            task: PhraseSet::new("task", &["task", "goal", "objective", "challenge"])?,
            action: PhraseSet::new("action", &["action", "did", "implemented", "developed"])?,
            result: PhraseSet::new("result", &["result", "outcome", "impact", "achievement"])?,
        })
    }

    pub fn score(&self, text: &str) -> ContentQuality {
        let lowered = text.to_lowercase();

        let has_numbers = self.number_regex.is_match(text);
        let has_specific_examples = self.examples.contains_any(&lowered);
        let has_quantifiable_results = self.quantification.contains_any(&lowered);
        let star = StarIndicators {
            situation: self.situation.contains_any(&lowered),
            task: self.task.contains_any(&lowered),
            action: self.action.contains_any(&lowered),
            result: self.result.contains_any(&lowered),
        };

        let mut quality_score = BASE_SCORE;
        if has_numbers {
            quality_score += 10.0;
        }
        if has_specific_examples {
            quality_score += 15.0;
        }
        if has_quantifiable_results {
            quality_score += 15.0;
        }
        if star.situation {
            quality_score += 5.0;
        }
        if star.task {
            quality_score += 5.0;
        }
        if star.action {
            quality_score += 5.0;
        }
        if star.result {
            quality_score += 10.0;
        }

        ContentQuality {
            quality_score: quality_score.min(100.0),
            has_specific_examples,
            has_quantifiable_results,
            has_numbers,
            star,
            uses_star_method: star.complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_method_detected() {
        let scorer = ContentScorer::new().unwrap();
        let quality = scorer.score("In this situation, my task was X; I implemented Y; the result was Z");

        assert!(quality.star.complete());
        assert!(quality.uses_star_method);
        // 50 + 5 + 5 + 5 + 10
        assert_eq!(quality.quality_score, 75.0);
    }

    #[test]
    fn test_partial_star_is_not_star_method() {
        let scorer = ContentScorer::new().unwrap();
        let quality = scorer.score("The situation was tough and I implemented a fix.");

        assert!(quality.star.situation);
        assert!(quality.star.action);
        assert!(!quality.star.result);
        assert!(!quality.uses_star_method);
    }

    #[test]
    fn test_evidence_markers() {
        let scorer = ContentScorer::new().unwrap();
        let quality = scorer.score("For example, I reduced latency by 40 ms.");

        assert!(quality.has_numbers);
        assert!(quality.has_specific_examples);
        assert!(quality.has_quantifiable_results);
        assert_eq!(quality.quality_score, 90.0);
    }

    #[test]
    fn test_score_is_capped() {
        let scorer = ContentScorer::new().unwrap();
        let quality = scorer.score(
            "For example, in that situation our goal was clear; I implemented caching \
             and the result was a 50% improvement.",
        );

        assert_eq!(quality.quality_score, 100.0);
    }

    #[test]
    fn test_plain_answer_gets_base_score() {
        let scorer = ContentScorer::new().unwrap();
        let quality = scorer.score("I enjoy working with people.");

        assert!(!quality.has_numbers);
        assert!(!quality.has_specific_examples);
        assert_eq!(quality.quality_score, 50.0);
    }
}
