//! Report structures for scored interview sessions

use crate::config::ScoringWeights;
use crate::processing::analyzer::AnalysisBundle;
use crate::session::{InterviewSession, PerformanceRating, ScoredAnswer, SessionSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything needed to render a session, independent of output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReport {
    pub session_id: String,

    /// Session-level means, rating, strengths and action items
    pub summary: SessionSummary,

    /// One-line verdict for the rating band
    pub verdict: String,

    pub answers: Vec<AnswerReport>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerReport {
    /// 1-based position in the session
    pub index: usize,
    pub question: String,
    pub overall_score: f64,
    pub rating: PerformanceRating,
    pub components: Vec<ScoreComponent>,
    pub feedback: Vec<String>,

    /// Full sub-analyses, rendered only in detailed output
    pub analysis: AnalysisBundle,
}

/// A headline sub-score and the weight it carried in the overall score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scorer_version: String,
    pub source: String,
    pub answer_count: usize,
    pub processing_time_ms: u64,
    pub sentiment_model: String,
}

impl InterviewReport {
    pub fn from_session(
        session: &InterviewSession,
        weights: &ScoringWeights,
        neutral_signal_score: f64,
        metadata: ReportMetadata,
    ) -> Self {
        let summary = session.summary(neutral_signal_score);
        let answers = session
            .answers
            .iter()
            .enumerate()
            .map(|(i, answer)| AnswerReport::new(i + 1, answer, weights, neutral_signal_score))
            .collect();

        Self {
            session_id: session.id.clone(),
            verdict: verdict_for(summary.rating).to_string(),
            summary,
            answers,
            metadata,
        }
    }
}

impl AnswerReport {
    fn new(index: usize, answer: &ScoredAnswer, weights: &ScoringWeights, neutral_signal_score: f64) -> Self {
        let bundle = &answer.bundle;
        let speech = bundle
            .speech
            .as_ref()
            .map_or(neutral_signal_score, |s| s.fluency_score);
        let facial = bundle
            .facial
            .as_ref()
            .map_or(neutral_signal_score, |f| f.confidence_level);

        let components = [
            ("Content", bundle.content_quality.quality_score, weights.content_quality),
            ("Relevance", bundle.relevance.relevance_score, weights.relevance),
            ("Clarity", bundle.clarity.clarity_score, weights.clarity),
            ("Confidence", bundle.sentiment.confidence_level, weights.sentiment),
            ("Professionalism", bundle.professionalism.professionalism_score, weights.professionalism),
            ("Fluency", speech, weights.speech),
            ("Facial", facial, weights.facial),
        ]
        .into_iter()
        .map(|(name, score, weight)| ScoreComponent {
            name: name.to_string(),
            score,
            weight,
        })
        .collect();

        Self {
            index,
            question: answer.question.clone(),
            overall_score: bundle.overall_score,
            rating: PerformanceRating::from_score(bundle.overall_score),
            components,
            feedback: answer.feedback.clone(),
            analysis: bundle.clone(),
        }
    }
}

impl ReportMetadata {
    pub fn new(source: impl Into<String>, answer_count: usize, processing_time_ms: u64, sentiment_model: &str) -> Self {
        Self {
            generated_at: Utc::now(),
            scorer_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.into(),
            answer_count,
            processing_time_ms,
            sentiment_model: sentiment_model.to_string(),
        }
    }
}

fn verdict_for(rating: PerformanceRating) -> &'static str {
    match rating {
        PerformanceRating::Excellent => "Interview-ready answers with strong evidence and delivery",
        PerformanceRating::Good => "Solid answers with a few areas to polish",
        PerformanceRating::Average => "Reasonable foundation, but answers need more structure and detail",
        PerformanceRating::NeedsImprovement => "Significant practice needed before a real interview",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_scores(scores: &[f64]) -> InterviewSession {
        let mut session = InterviewSession::new("report-test");
        for &score in scores {
            let mut bundle = AnalysisBundle::empty();
            bundle.content_quality.quality_score = score;
            bundle.overall_score = score;
            session.record(ScoredAnswer {
                question: "Describe a conflict.".to_string(),
                answer: "We disagreed on scope.".to_string(),
                bundle,
                feedback: vec!["Continue practicing".to_string()],
            });
        }
        session
    }

    #[test]
    fn test_report_from_session() {
        let session = session_with_scores(&[90.0, 70.0]);
        let report = InterviewReport::from_session(
            &session,
            &ScoringWeights::default(),
            70.0,
            ReportMetadata::new("session.json", 2, 12, "lexicon"),
        );

        assert_eq!(report.session_id, "report-test");
        assert_eq!(report.summary.metrics.overall_score, 80.0);
        assert_eq!(report.summary.rating, PerformanceRating::Good);
        assert_eq!(report.answers.len(), 2);
        assert_eq!(report.answers[0].index, 1);
        assert_eq!(report.answers[0].rating, PerformanceRating::Excellent);
        assert_eq!(report.answers[1].components.len(), 7);
        assert_eq!(report.answers[1].components[0].score, 70.0);
        assert_eq!(report.answers[1].components[0].weight, 0.25);
    }

    #[test]
    fn test_missing_signals_show_neutral_component() {
        let mut session = session_with_scores(&[60.0]);
        session.answers[0].bundle.speech = None;

        let report = InterviewReport::from_session(
            &session,
            &ScoringWeights::default(),
            70.0,
            ReportMetadata::new("inline", 1, 0, "lexicon"),
        );

        let fluency = report.answers[0]
            .components
            .iter()
            .find(|c| c.name == "Fluency")
            .unwrap();
        assert_eq!(fluency.score, 70.0);
    }
}
