//! Facial engagement from an externally measured video signal

use crate::processing::round_to;
use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_EYE_CONTACT: f64 = 60.0;
const DEFAULT_ENGAGEMENT: f64 = 70.0;
const FALLBACK_CONFIDENCE: f64 = 70.0;
const EMOTION_ADJUSTMENT: f64 = 10.0;

/// Summary of a video capture supplied by an upstream vision component.
///
/// Every field is optional so a partially populated signal still scores;
/// missing fields take documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoSignal {
    #[serde(default)]
    pub eye_contact_percentage: Option<f64>,
    #[serde(default)]
    pub dominant_emotion: Option<Emotion>,
    #[serde(default)]
    pub engagement_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Happy,
    Sad,
    Worried,
    Focused,
    #[default]
    Neutral,
    Surprised,
    Angry,
    #[serde(other)]
    Other,
}

impl Emotion {
    pub fn confidence_adjustment(&self) -> f64 {
        match self {
            Emotion::Happy | Emotion::Focused => EMOTION_ADJUSTMENT,
            Emotion::Sad | Emotion::Worried => -EMOTION_ADJUSTMENT,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Worried => "worried",
            Emotion::Focused => "focused",
            Emotion::Neutral => "neutral",
            Emotion::Surprised => "surprised",
            Emotion::Angry => "angry",
            Emotion::Other => "other",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nervousness {
    Low,
    #[default]
    Moderate,
    High,
}

impl fmt::Display for Nervousness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Nervousness::Low => "low",
            Nervousness::Moderate => "moderate",
            Nervousness::High => "high",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeContact {
    Excellent,
    #[default]
    Good,
    NeedsImprovement,
}

impl fmt::Display for EyeContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EyeContact::Excellent => "excellent",
            EyeContact::Good => "good",
            EyeContact::NeedsImprovement => "needs improvement",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacialAnalysis {
    pub confidence_level: f64,
    pub nervousness: Nervousness,
    pub eye_contact: EyeContact,
    pub expressions: Emotion,
    /// Present only when a video signal was supplied
    pub eye_contact_percentage: Option<f64>,
    pub engagement_score: Option<f64>,
}

impl FacialAnalysis {
    /// Neutral placeholder used when no video signal exists. Not a measurement.
    pub fn neutral_fallback() -> Self {
        Self {
            confidence_level: FALLBACK_CONFIDENCE,
            nervousness: Nervousness::Moderate,
            eye_contact: EyeContact::Good,
            expressions: Emotion::Neutral,
            eye_contact_percentage: None,
            engagement_score: None,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.engagement_score.is_some() || self.eye_contact_percentage.is_some()
    }
}

pub struct FacialScorer;

impl FacialScorer {
    pub fn score(signal: Option<&VideoSignal>) -> FacialAnalysis {
        let Some(signal) = signal else {
            return FacialAnalysis::neutral_fallback();
        };

        let eye_contact_pct = signal
            .eye_contact_percentage
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_EYE_CONTACT)
            .clamp(0.0, 100.0);
        let emotion = signal.dominant_emotion.unwrap_or_default();
        let engagement = signal
            .engagement_score
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_ENGAGEMENT)
            .clamp(0.0, 100.0);

        let nervousness = if engagement < 50.0 {
            Nervousness::High
        } else if engagement < 70.0 {
            Nervousness::Moderate
        } else {
            Nervousness::Low
        };

        let confidence = (engagement + emotion.confidence_adjustment()).clamp(0.0, 100.0);

        let eye_contact = if eye_contact_pct > 70.0 {
            EyeContact::Excellent
        } else if eye_contact_pct > 50.0 {
            EyeContact::Good
        } else {
            EyeContact::NeedsImprovement
        };

        FacialAnalysis {
            confidence_level: round_to(confidence, 1),
            nervousness,
            eye_contact,
            expressions: emotion,
            eye_contact_percentage: Some(round_to(eye_contact_pct, 1)),
            engagement_score: Some(round_to(engagement, 1)),
        }
    }
}
