//! Rule-based feedback over a scored answer
//!
//! Rules are evaluated in a fixed order and each contributes at most one
//! message. Order is priority: the list is truncated, never re-sorted.

use crate::processing::analyzer::AnalysisBundle;
use crate::processing::facial::Nervousness;

pub const DEFAULT_MAX_ITEMS: usize = 5;
pub const ENCOURAGEMENT: &str = "Excellent answer! Keep up the great work!";

const MIN_SECTION_SCORE: f64 = 60.0;
const MAX_FILLER_WORDS: usize = 3;
const MIN_EYE_CONTACT: f64 = 50.0;
const MIN_ENGAGEMENT: f64 = 60.0;
const MIN_WORDS: usize = 30;
const MAX_WORDS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackRule {
    SpecificExamples,
    QuantifiableResults,
    ContentDetail,
    FillerWords,
    Stuttering,
    SpeakingPace,
    EyeContact,
    Nervousness,
    Engagement,
    Relevance,
    Structure,
    Professionalism,
    TooShort,
    TooLong,
}

impl FeedbackRule {
    pub const ORDER: [FeedbackRule; 14] = [
        FeedbackRule::SpecificExamples,
        FeedbackRule::QuantifiableResults,
        FeedbackRule::ContentDetail,
        FeedbackRule::FillerWords,
        FeedbackRule::Stuttering,
        FeedbackRule::SpeakingPace,
        FeedbackRule::EyeContact,
        FeedbackRule::Nervousness,
        FeedbackRule::Engagement,
        FeedbackRule::Relevance,
        FeedbackRule::Structure,
        FeedbackRule::Professionalism,
        FeedbackRule::TooShort,
        FeedbackRule::TooLong,
    ];

    /// The message for this rule if it fires on `bundle`.
    pub fn evaluate(&self, bundle: &AnalysisBundle) -> Option<String> {
        let content = &bundle.content_quality;
        let speech = bundle.speech.as_ref();
        let facial = bundle.facial.as_ref();
        let word_count = bundle.text_metrics.word_count;

        match self {
            FeedbackRule::SpecificExamples if !content.has_specific_examples => {
                Some("Add specific examples from your experience to illustrate your points".to_string())
            }
            FeedbackRule::QuantifiableResults if !content.has_quantifiable_results => Some(
                "Include measurable results (percentages, numbers, metrics) to demonstrate impact".to_string(),
            ),
            FeedbackRule::ContentDetail if content.quality_score < MIN_SECTION_SCORE => {
                Some("Provide more detailed responses with concrete details and outcomes".to_string())
            }
            FeedbackRule::FillerWords => speech
                .filter(|s| s.filler_word_count > MAX_FILLER_WORDS)
                .map(|s| {
                    format!(
                        "Reduce filler words (found {} instances of 'um', 'uh', 'like')",
                        s.filler_word_count
                    )
                }),
            FeedbackRule::Stuttering => speech
                .filter(|s| s.stuttering_instances > 0)
                .map(|_| "Practice your answers to reduce stuttering and improve fluency".to_string()),
            FeedbackRule::SpeakingPace => speech
                .filter(|s| s.speaking_pace.is_extreme())
                .map(|s| {
                    format!(
                        "Adjust your speaking pace (currently {}) to 130-160 words/minute",
                        s.speaking_pace
                    )
                }),
            FeedbackRule::EyeContact => facial
                .and_then(|f| f.eye_contact_percentage)
                .filter(|&pct| pct < MIN_EYE_CONTACT)
                .map(|_| "Maintain better eye contact with the camera (look directly at it)".to_string()),
            FeedbackRule::Nervousness => facial.filter(|f| f.nervousness == Nervousness::High).map(|_| {
                "Try to relax and appear more confident - take deep breaths before answering".to_string()
            }),
            FeedbackRule::Engagement => facial
                .and_then(|f| f.engagement_score)
                .filter(|&score| score < MIN_ENGAGEMENT)
                .map(|_| "Show more enthusiasm and engagement through your facial expressions".to_string()),
            FeedbackRule::Relevance if bundle.relevance.relevance_score < MIN_SECTION_SCORE => {
                Some("Ensure your answer directly addresses what was asked in the question".to_string())
            }
            FeedbackRule::Structure if bundle.clarity.clarity_score < MIN_SECTION_SCORE => {
                Some("Structure your answer better using transitions (first, then, finally)".to_string())
            }
            FeedbackRule::Professionalism
                if bundle.professionalism.professionalism_score < MIN_SECTION_SCORE =>
            {
                Some("Use more professional language and avoid casual expressions".to_string())
            }
            FeedbackRule::TooShort if word_count < MIN_WORDS => {
                Some("Provide longer, more detailed answers (aim for 50-150 words)".to_string())
            }
            FeedbackRule::TooLong if word_count > MAX_WORDS => {
                Some("Keep answers more concise and focused on key points".to_string())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackGenerator {
    max_items: usize,
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_ITEMS)
    }
}

impl FeedbackGenerator {
    /// A limit of zero is raised to one so the list is never empty.
    pub fn with_limit(max_items: usize) -> Self {
        Self {
            max_items: max_items.max(1),
        }
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn generate(&self, bundle: &AnalysisBundle) -> Vec<String> {
        let mut feedback: Vec<String> = FeedbackRule::ORDER
            .iter()
            .filter_map(|rule| rule.evaluate(bundle))
            .collect();

        if feedback.is_empty() {
            feedback.push(ENCOURAGEMENT.to_string());
        }

        feedback.truncate(self.max_items);
        feedback
    }
}

/// Feedback with the default limit of five items.
pub fn get_feedback(bundle: &AnalysisBundle) -> Vec<String> {
    FeedbackGenerator::default().generate(bundle)
}
