//! Answer analysis engine combining every scorer into one bundle

use crate::config::{AnalysisConfig, Config, ScoringWeights};
use crate::error::Result;
use crate::processing::clarity::{ClarityAnalysis, ClarityScorer};
use crate::processing::content::{ContentQuality, ContentScorer};
use crate::processing::facial::{FacialAnalysis, FacialScorer, VideoSignal};
use crate::processing::professionalism::{ProfessionalismAnalysis, ProfessionalismScorer};
use crate::processing::relevance::{RelevanceAnalysis, RelevanceScorer};
use crate::processing::round_to;
use crate::processing::sentiment::{LexiconSentimentModel, SentimentAnalysis, SentimentModel, SentimentScorer};
use crate::processing::speech::{SpeechAnalysis, SpeechScorer};
use crate::processing::text_processor::{TextMetrics, TextProcessor};
use serde::{Deserialize, Serialize};

/// One spoken answer and the context it was given in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerInput {
    pub text: String,
    pub question: String,
    #[serde(default)]
    pub video_signal: Option<VideoSignal>,
    #[serde(default)]
    pub duration_seconds: f64,
}

impl AnswerInput {
    pub fn new(text: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            question: question.into(),
            video_signal: None,
            duration_seconds: 0.0,
        }
    }

    pub fn with_video(mut self, signal: VideoSignal) -> Self {
        self.video_signal = Some(signal);
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self
    }
}

/// Every sub-score for one answer plus the aggregated overall score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub text_metrics: TextMetrics,
    pub content_quality: ContentQuality,
    pub sentiment: SentimentAnalysis,
    pub relevance: RelevanceAnalysis,
    pub clarity: ClarityAnalysis,
    pub professionalism: ProfessionalismAnalysis,
    #[serde(default)]
    pub speech: Option<SpeechAnalysis>,
    #[serde(default)]
    pub facial: Option<FacialAnalysis>,
    pub overall_score: f64,
}

impl AnalysisBundle {
    /// Zeroed placeholder returned for empty answers.
    pub fn empty() -> Self {
        Self {
            speech: Some(SpeechAnalysis::default()),
            facial: Some(FacialAnalysis::default()),
            ..Self::default()
        }
    }
}

/// Runs all scorers for an answer. Immutable after construction and safe to
/// share across threads.
pub struct AnswerAnalyzer {
    text_processor: TextProcessor,
    content_scorer: ContentScorer,
    sentiment_scorer: SentimentScorer,
    relevance_scorer: RelevanceScorer,
    clarity_scorer: ClarityScorer,
    professionalism_scorer: ProfessionalismScorer,
    speech_scorer: SpeechScorer,
    weights: ScoringWeights,
    analysis_config: AnalysisConfig,
}

impl AnswerAnalyzer {
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            text_processor: TextProcessor::new(),
            content_scorer: ContentScorer::new()?,
            sentiment_scorer: SentimentScorer::new(Box::new(LexiconSentimentModel::new())),
            relevance_scorer: RelevanceScorer::new(config.analysis.relevance_boost),
            clarity_scorer: ClarityScorer::new()?,
            professionalism_scorer: ProfessionalismScorer::new()?,
            speech_scorer: SpeechScorer::new()?,
            weights: config.weights,
            analysis_config: config.analysis.clone(),
        })
    }

    /// Replace the bundled lexicon sentiment model.
    pub fn with_sentiment_model(mut self, model: Box<dyn SentimentModel>) -> Self {
        self.sentiment_scorer = SentimentScorer::new(model);
        self
    }

    pub fn analyze(&self, input: &AnswerInput) -> AnalysisBundle {
        self.analyze_answer(
            &input.text,
            &input.question,
            input.video_signal.as_ref(),
            input.duration_seconds,
        )
    }

    /// Score one answer. Empty or whitespace-only text yields the zeroed bundle.
    pub fn analyze_answer(
        &self,
        text: &str,
        question: &str,
        video_signal: Option<&VideoSignal>,
        duration_seconds: f64,
    ) -> AnalysisBundle {
        if text.trim().is_empty() {
            log::debug!("Empty answer, skipping analysis");
            return AnalysisBundle::empty();
        }

        let duration = if duration_seconds.is_finite() { duration_seconds.max(0.0) } else { 0.0 };

        let mut bundle = AnalysisBundle {
            text_metrics: self.text_processor.metrics(text),
            content_quality: self.content_scorer.score(text),
            sentiment: self.sentiment_scorer.score(text),
            relevance: self.relevance_scorer.score(&self.text_processor, text, question),
            clarity: self.clarity_scorer.score(&self.text_processor, text),
            professionalism: self.professionalism_scorer.score(text),
            speech: Some(self.speech_scorer.score(&self.text_processor, text, duration)),
            facial: Some(FacialScorer::score(video_signal)),
            overall_score: 0.0,
        };

        bundle.overall_score = self.calculate_overall_score(&bundle);

        log::debug!(
            "Scored answer: content={} relevance={} clarity={} confidence={} professionalism={} overall={}",
            bundle.content_quality.quality_score,
            bundle.relevance.relevance_score,
            bundle.clarity.clarity_score,
            bundle.sentiment.confidence_level,
            bundle.professionalism.professionalism_score,
            bundle.overall_score
        );

        bundle
    }

    /// Weighted sum of each sub-score's headline field, rounded to one decimal.
    pub fn calculate_overall_score(&self, bundle: &AnalysisBundle) -> f64 {
        combine_scores(&self.weights, bundle, self.analysis_config.neutral_signal_score)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn sentiment_model_name(&self) -> &str {
        self.sentiment_scorer.model_name()
    }
}

/// Missing speech or facial sub-bundles contribute `neutral_score` instead of zero.
pub fn combine_scores(weights: &ScoringWeights, bundle: &AnalysisBundle, neutral_score: f64) -> f64 {
    let speech = bundle
        .speech
        .as_ref()
        .map(|s| s.fluency_score)
        .unwrap_or(neutral_score);
    let facial = bundle
        .facial
        .as_ref()
        .map(|f| f.confidence_level)
        .unwrap_or(neutral_score);

    let overall = bundle.content_quality.quality_score * weights.content_quality
        + bundle.relevance.relevance_score * weights.relevance
        + bundle.clarity.clarity_score * weights.clarity
        + bundle.sentiment.confidence_level * weights.sentiment
        + bundle.professionalism.professionalism_score * weights.professionalism
        + speech * weights.speech
        + facial * weights.facial;

    round_to(overall, 1)
}
