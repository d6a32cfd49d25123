//! Interview sessions: caller-owned storage and per-session aggregates

use crate::error::{InterviewScorerError, Result};
use crate::processing::analyzer::AnalysisBundle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const STRENGTH_THRESHOLD: f64 = 75.0;
const IMPROVEMENT_THRESHOLD: f64 = 60.0;
const ACTION_THRESHOLD: f64 = 70.0;
const EYE_CONTACT_STRENGTH: f64 = 70.0;
const EYE_CONTACT_IMPROVEMENT: f64 = 50.0;
const EYE_CONTACT_ACTION: f64 = 60.0;
const MAX_ACTION_ITEMS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question: String,
    pub answer: String,
    pub bundle: AnalysisBundle,
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub answers: Vec<ScoredAnswer>,
}

impl InterviewSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            started_at: Utc::now(),
            answers: Vec::new(),
        }
    }

    pub fn record(&mut self, answer: ScoredAnswer) {
        self.answers.push(answer);
    }

    /// Session means; answers without speech or facial analysis count `neutral_signal_score` there.
    pub fn metrics(&self, neutral_signal_score: f64) -> SessionMetrics {
        SessionMetrics::from_answers(&self.answers, neutral_signal_score)
    }

    pub fn summary(&self, neutral_signal_score: f64) -> SessionSummary {
        SessionSummary::from_metrics(self.metrics(neutral_signal_score))
    }
}

/// Keyed session storage. One store per caller; nothing here is global.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, InterviewSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session, failing if the id is already in use.
    pub fn create(&mut self, id: impl Into<String>) -> Result<&mut InterviewSession> {
        let id = id.into();
        if self.sessions.contains_key(&id) {
            return Err(InterviewScorerError::InvalidInput(format!(
                "Session '{}' already exists",
                id
            )));
        }

        log::debug!("Created session {}", id);
        Ok(self
            .sessions
            .entry(id.clone())
            .or_insert_with(|| InterviewSession::new(id)))
    }

    pub fn get(&self, id: &str) -> Option<&InterviewSession> {
        self.sessions.get(id)
    }

    pub fn record_answer(&mut self, id: &str, answer: ScoredAnswer) -> Result<()> {
        let session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| InterviewScorerError::InvalidInput(format!("Unknown session '{}'", id)))?;
        session.record(answer);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<InterviewSession> {
        self.sessions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Arithmetic mean of each headline score over a session's answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub answer_count: usize,
    pub content_quality: f64,
    pub relevance: f64,
    pub clarity: f64,
    pub confidence: f64,
    pub professionalism: f64,
    pub fluency: f64,
    pub facial_confidence: f64,
    pub overall_score: f64,
    /// Mean over answers that carried a measured video signal
    pub eye_contact: Option<f64>,
}

impl SessionMetrics {
    pub fn from_answers(answers: &[ScoredAnswer], neutral_signal_score: f64) -> Self {
        if answers.is_empty() {
            return Self::default();
        }

        let eye_contact: Vec<f64> = answers
            .iter()
            .filter_map(|a| a.bundle.facial.as_ref().and_then(|f| f.eye_contact_percentage))
            .collect();

        Self {
            answer_count: answers.len(),
            content_quality: mean_of(answers, |b| b.content_quality.quality_score),
            relevance: mean_of(answers, |b| b.relevance.relevance_score),
            clarity: mean_of(answers, |b| b.clarity.clarity_score),
            confidence: mean_of(answers, |b| b.sentiment.confidence_level),
            professionalism: mean_of(answers, |b| b.professionalism.professionalism_score),
            fluency: mean_of(answers, |b| {
                b.speech.as_ref().map_or(neutral_signal_score, |s| s.fluency_score)
            }),
            facial_confidence: mean_of(answers, |b| {
                b.facial.as_ref().map_or(neutral_signal_score, |f| f.confidence_level)
            }),
            overall_score: mean_of(answers, |b| b.overall_score),
            eye_contact: if eye_contact.is_empty() {
                None
            } else {
                Some(eye_contact.iter().sum::<f64>() / eye_contact.len() as f64)
            },
        }
    }
}

fn mean_of(answers: &[ScoredAnswer], field: impl Fn(&AnalysisBundle) -> f64) -> f64 {
    answers.iter().map(|a| field(&a.bundle)).sum::<f64>() / answers.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            PerformanceRating::Excellent
        } else if score >= 70.0 {
            PerformanceRating::Good
        } else if score >= 50.0 {
            PerformanceRating::Average
        } else {
            PerformanceRating::NeedsImprovement
        }
    }
}

impl fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerformanceRating::Excellent => "Excellent",
            PerformanceRating::Good => "Good",
            PerformanceRating::Average => "Average",
            PerformanceRating::NeedsImprovement => "Needs Improvement",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub metrics: SessionMetrics,
    pub rating: PerformanceRating,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub action_items: Vec<String>,
}

impl SessionSummary {
    pub fn from_metrics(metrics: SessionMetrics) -> Self {
        let (strengths, improvements) = Self::strengths_and_improvements(&metrics);
        let action_items = Self::action_items(&metrics);

        Self {
            rating: PerformanceRating::from_score(metrics.overall_score),
            metrics,
            strengths,
            improvements,
            action_items,
        }
    }

    fn strengths_and_improvements(metrics: &SessionMetrics) -> (Vec<String>, Vec<String>) {
        let mut strengths = Vec::new();
        let mut improvements = Vec::new();

        let checks = [
            (
                metrics.content_quality,
                "Strong content quality with good examples and details",
                "Provide more specific examples and quantifiable achievements",
            ),
            (
                metrics.clarity,
                "Clear and articulate communication",
                "Improve clarity by reducing filler words and organizing thoughts better",
            ),
            (
                metrics.confidence,
                "Confident and positive demeanor",
                "Build confidence through more preparation and practice",
            ),
            (
                metrics.professionalism,
                "Professional language and tone",
                "Use more professional language and avoid casual expressions",
            ),
        ];

        for (score, strength, improvement) in checks {
            if score >= STRENGTH_THRESHOLD {
                strengths.push(strength.to_string());
            } else if score < IMPROVEMENT_THRESHOLD {
                improvements.push(improvement.to_string());
            }
        }

        if let Some(eye_contact) = metrics.eye_contact {
            if eye_contact >= EYE_CONTACT_STRENGTH {
                strengths.push("Good eye contact and engagement".to_string());
            } else if eye_contact < EYE_CONTACT_IMPROVEMENT {
                improvements.push("Maintain better eye contact with the camera".to_string());
            }
        }

        if strengths.is_empty() {
            strengths.push("Shows potential for growth".to_string());
        }
        if improvements.is_empty() {
            improvements.push("Continue practicing".to_string());
        }

        (strengths, improvements)
    }

    fn action_items(metrics: &SessionMetrics) -> Vec<String> {
        let mut items = Vec::new();

        if metrics.content_quality < ACTION_THRESHOLD {
            items.push(
                "Practice using the STAR method (Situation, Task, Action, Result) to structure your answers"
                    .to_string(),
            );
        }
        if metrics.clarity < ACTION_THRESHOLD {
            items.push("Record yourself answering common questions and listen for clarity improvements".to_string());
        }
        if metrics.confidence < ACTION_THRESHOLD {
            items.push(
                "Build confidence by researching the company thoroughly and preparing answers in advance".to_string(),
            );
        }
        if metrics.eye_contact.map_or(false, |pct| pct < EYE_CONTACT_ACTION) {
            items.push("Practice maintaining eye contact with the camera during mock interviews".to_string());
        }

        if items.is_empty() {
            items = vec![
                "Continue practicing with diverse question types".to_string(),
                "Research industry-specific terminology and trends".to_string(),
                "Refine your personal stories and achievements".to_string(),
            ];
        }

        items.truncate(MAX_ACTION_ITEMS);
        items
    }
}
