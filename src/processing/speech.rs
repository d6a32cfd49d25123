//! Speech fluency: fillers, stutters, pauses and pacing

use crate::error::{InterviewScorerError, Result};
use crate::processing::lexicon::PhraseSet;
use crate::processing::round_to;
use crate::processing::text_processor::{is_alphabetic, TextProcessor};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const FILLER_PENALTY: (f64, f64) = (5.0, 30.0);
const STUTTER_PENALTY: (f64, f64) = (10.0, 20.0);
const PAUSE_PENALTY: (f64, f64) = (5.0, 15.0);
const PACE_PENALTY: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechAnalysis {
    pub filler_word_count: usize,
    /// Words per minute, 0 when the duration is unknown
    pub speaking_rate: f64,
    pub repetitions: usize,
    pub stuttering_instances: usize,
    pub pause_indicators: usize,
    pub fluency_score: f64,
    pub speaking_pace: SpeakingPace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeakingPace {
    #[default]
    Unknown,
    TooSlow,
    Slow,
    Optimal,
    Fast,
    TooFast,
}

impl SpeakingPace {
    pub fn from_rate(rate: f64) -> Self {
        if rate == 0.0 {
            SpeakingPace::Unknown
        } else if rate < 100.0 {
            SpeakingPace::TooSlow
        } else if rate < 130.0 {
            SpeakingPace::Slow
        } else if rate < 160.0 {
            SpeakingPace::Optimal
        } else if rate < 190.0 {
            SpeakingPace::Fast
        } else {
            SpeakingPace::TooFast
        }
    }

    pub fn is_extreme(&self) -> bool {
        matches!(self, SpeakingPace::TooSlow | SpeakingPace::TooFast)
    }
}

impl fmt::Display for SpeakingPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpeakingPace::Unknown => "unknown",
            SpeakingPace::TooSlow => "too slow",
            SpeakingPace::Slow => "slow",
            SpeakingPace::Optimal => "optimal",
            SpeakingPace::Fast => "fast",
            SpeakingPace::TooFast => "too fast",
        };
        write!(f, "{}", label)
    }
}

pub struct SpeechScorer {
    fillers: PhraseSet,
    word_regex: Regex,
}

impl SpeechScorer {
    pub fn new() -> Result<Self> {
        let word_regex = Regex::new(r"\w+")
            .map_err(|e| InterviewScorerError::Processing(format!("Invalid word regex: {}", e)))?;

        Ok(Self {
            fillers: PhraseSet::new(
                "fillers",
                &[
                    "um", "uh", "like", "you know", "sort of", "kind of", "i mean", "actually",
                    "basically", "literally", "seriously", "honestly", "right", "okay", "so",
                    "well", "yeah",
                ],
            )?,
            word_regex,
        })
    }

    pub fn score(&self, processor: &TextProcessor, text: &str, duration_seconds: f64) -> SpeechAnalysis {
        let lowered = text.to_lowercase();
        let words = processor.words(&lowered);

        let filler_word_count = self.fillers.occurrences(&lowered);

        let speaking_rate = if duration_seconds > 0.0 {
            words.len() as f64 / duration_seconds * 60.0
        } else {
            0.0
        };

        let repetitions = Self::count_repetitions(&words);
        let pause_indicators = Self::count_pause_indicators(text);
        let stuttering_instances = self.count_stutters(&lowered);

        let mut fluency_score = 100.0;
        fluency_score -= (filler_word_count as f64 * FILLER_PENALTY.0).min(FILLER_PENALTY.1);
        fluency_score -= (stuttering_instances as f64 * STUTTER_PENALTY.0).min(STUTTER_PENALTY.1);
        fluency_score -= (pause_indicators as f64 * PAUSE_PENALTY.0).min(PAUSE_PENALTY.1);

        if speaking_rate > 0.0 && (speaking_rate < 100.0 || speaking_rate > 200.0) {
            fluency_score -= PACE_PENALTY;
        }

        SpeechAnalysis {
            filler_word_count,
            speaking_rate: round_to(speaking_rate, 1),
            repetitions,
            stuttering_instances,
            pause_indicators,
            fluency_score: fluency_score.clamp(0.0, 100.0),
            speaking_pace: SpeakingPace::from_rate(speaking_rate),
        }
    }

    /// Distinct alphabetic words longer than three characters used more than twice.
    fn count_repetitions(words: &[String]) -> usize {
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for word in words.iter().filter(|w| is_alphabetic(w) && w.chars().count() > 3) {
            *frequency.entry(word.as_str()).or_insert(0) += 1;
        }
        frequency.values().filter(|&&count| count > 2).count()
    }

    /// `...` and `..` are both counted, so an ellipsis contributes twice.
    fn count_pause_indicators(text: &str) -> usize {
        text.matches("...").count() + text.matches("..").count()
    }

    /// Immediately repeated whole words ("I I think"), non-overlapping left to right.
    fn count_stutters(&self, lowered: &str) -> usize {
        let tokens: Vec<regex::Match> = self.word_regex.find_iter(lowered).collect();
        let mut stutters = 0;
        let mut i = 0;

        while i + 1 < tokens.len() {
            let (current, next) = (tokens[i], tokens[i + 1]);
            let gap = &lowered[current.end()..next.start()];
            let separated_by_whitespace = !gap.is_empty() && gap.chars().all(char::is_whitespace);

            if separated_by_whitespace && current.as_str() == next.as_str() {
                stutters += 1;
                i += 2;
            } else {
                i += 1;
            }
        }

        stutters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> (TextProcessor, SpeechScorer) {
        (TextProcessor::new(), SpeechScorer::new().unwrap())
    }

    #[test]
    fn test_pace_thresholds() {
        assert_eq!(SpeakingPace::from_rate(95.0), SpeakingPace::TooSlow);
        assert_eq!(SpeakingPace::from_rate(129.0), SpeakingPace::Slow);
        assert_eq!(SpeakingPace::from_rate(159.0), SpeakingPace::Optimal);
        assert_eq!(SpeakingPace::from_rate(189.0), SpeakingPace::Fast);
        assert_eq!(SpeakingPace::from_rate(250.0), SpeakingPace::TooFast);
        assert_eq!(SpeakingPace::from_rate(0.0), SpeakingPace::Unknown);
        assert_eq!(SpeakingPace::TooFast.to_string(), "too fast");
    }

    #[test]
    fn test_fluency_penalties() {
        let (processor, scorer) = scorer();
        // fillers: um, uh, um, yeah = 4; stutter: "the the"; pause: "..." counts twice
        let text = "Um I built the the cache uh... then um yeah";
        let analysis = scorer.score(&processor, text, 0.0);

        assert_eq!(analysis.filler_word_count, 4);
        assert_eq!(analysis.stuttering_instances, 1);
        assert_eq!(analysis.pause_indicators, 2);
        // 100 - 20 - 10 - 10
        assert_eq!(analysis.fluency_score, 60.0);
        assert_eq!(analysis.speaking_pace, SpeakingPace::Unknown);
    }

    #[test]
    fn test_speaking_rate_and_pace_penalty() {
        let (processor, scorer) = scorer();
        let text = "We migrated twelve services to the new cluster";
        // 8 words in 6 seconds = 80 wpm
        let analysis = scorer.score(&processor, text, 6.0);

        assert_eq!(analysis.speaking_rate, 80.0);
        assert_eq!(analysis.speaking_pace, SpeakingPace::TooSlow);
        assert_eq!(analysis.fluency_score, 90.0);
    }

    #[test]
    fn test_fast_pace_penalty_only_above_two_hundred() {
        let (processor, scorer) = scorer();
        let text = "We migrated twelve services to the new cluster";

        // 8 words in 2 seconds = 240 wpm
        let rushed = scorer.score(&processor, text, 2.0);
        assert_eq!(rushed.speaking_rate, 240.0);
        assert_eq!(rushed.speaking_pace, SpeakingPace::TooFast);
        assert_eq!(rushed.fluency_score, 90.0);

        // 192 wpm is already too fast but not penalised
        let quick = scorer.score(&processor, text, 2.5);
        assert_eq!(quick.speaking_rate, 192.0);
        assert_eq!(quick.speaking_pace, SpeakingPace::TooFast);
        assert_eq!(quick.fluency_score, 100.0);
    }

    #[test]
    fn test_punctuation_counts_towards_rate() {
        let (processor, scorer) = scorer();
        // 7 words, 2 commas and a full stop in 5 seconds = 120 wpm
        let analysis = scorer.score(&processor, "First, we planned, then we shipped it.", 5.0);

        assert_eq!(analysis.speaking_rate, 120.0);
        assert_eq!(analysis.speaking_pace, SpeakingPace::Slow);
    }

    #[test]
    fn test_fillers_inside_words_are_counted() {
        let (processor, scorer) = scorer();
        // "so" inside "also", "well" as a word
        let analysis = scorer.score(&processor, "I also did it well", 0.0);

        assert_eq!(analysis.filler_word_count, 2);
    }

    #[test]
    fn test_stutter_counting() {
        let (_, scorer) = scorer();

        assert_eq!(scorer.count_stutters("i i think so"), 1);
        assert_eq!(scorer.count_stutters("the the the end"), 1);
        assert_eq!(scorer.count_stutters("the the the the"), 2);
        assert_eq!(scorer.count_stutters("the theory"), 0);
        assert_eq!(scorer.count_stutters("done, done"), 0);
    }

    #[test]
    fn test_repetitions() {
        let (processor, scorer) = scorer();
        let analysis = scorer.score(
            &processor,
            "Testing matters. Testing saves time. Testing again, and data data data.",
            0.0,
        );

        // "testing" x3 and "data" x3 (four letters)
        assert_eq!(analysis.repetitions, 2);
    }

    #[test]
    fn test_fluency_floor_caps() {
        let (processor, scorer) = scorer();
        let text = "um um. uh uh. so so. like like... well well.. okay okay... right right";
        let analysis = scorer.score(&processor, text, 0.0);

        // every penalty hits its cap: 100 - 30 - 20 - 15
        assert_eq!(analysis.fluency_score, 35.0);
    }
}
