//! Professional versus casual register

use crate::error::Result;
use crate::processing::lexicon::PhraseSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalismAnalysis {
    pub professionalism_score: f64,
    pub professional_language: usize,
    pub casual_language: usize,
}

pub struct ProfessionalismScorer {
    professional: PhraseSet,
    casual: PhraseSet,
}

impl ProfessionalismScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            professional: PhraseSet::new(
                "professional",
                &[
                    "experience", "responsible for", "achieved", "developed", "implemented",
                    "collaborated", "managed", "led", "initiated",
                ],
            )?,
            casual: PhraseSet::new(
                "casual",
                &["gonna", "wanna", "kinda", "sorta", "yeah", "stuff", "things", "like"],
            )?,
        })
    }

    pub fn score(&self, text: &str) -> ProfessionalismAnalysis {
        let lowered = text.to_lowercase();

        let professional_language = self.professional.distinct_matches(&lowered);
        let casual_language = self.casual.distinct_matches(&lowered);

        let score = 70.0 + professional_language as f64 * 5.0 - casual_language as f64 * 10.0;

        ProfessionalismAnalysis {
            professionalism_score: score.clamp(0.0, 100.0),
            professional_language,
            casual_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professional_vocabulary_raises_score() {
        let scorer = ProfessionalismScorer::new().unwrap();
        let analysis = scorer.score("I managed the rollout and implemented the new billing pipeline.");

        assert_eq!(analysis.professional_language, 2);
        assert_eq!(analysis.casual_language, 0);
        assert_eq!(analysis.professionalism_score, 80.0);
    }

    #[test]
    fn test_casual_vocabulary_lowers_score() {
        let scorer = ProfessionalismScorer::new().unwrap();
        let analysis = scorer.score("Yeah so I was gonna fix stuff, kinda.");

        assert_eq!(analysis.casual_language, 4);
        assert_eq!(analysis.professionalism_score, 30.0);
    }

    #[test]
    fn test_score_floor() {
        let scorer = ProfessionalismScorer::new().unwrap();
        let analysis = scorer.score("yeah gonna wanna kinda sorta stuff things like");

        assert_eq!(analysis.casual_language, 8);
        assert_eq!(analysis.professionalism_score, 0.0);
    }
}
