//! Interview answer scoring library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod session;
pub mod output;

pub use config::Config;
pub use error::{InterviewScorerError, Result};
pub use processing::analyzer::{AnalysisBundle, AnswerAnalyzer, AnswerInput};
pub use processing::facial::VideoSignal;
pub use processing::feedback::{get_feedback, FeedbackGenerator};

use std::sync::OnceLock;

static DEFAULT_ANALYZER: OnceLock<Option<AnswerAnalyzer>> = OnceLock::new();

/// Score one answer with the default configuration.
///
/// The default analyzer is built on first use and shared by every later call.
pub fn analyze_answer(
    text: &str,
    question: &str,
    video_signal: Option<&VideoSignal>,
    duration_seconds: Option<f64>,
) -> AnalysisBundle {
    let analyzer = DEFAULT_ANALYZER.get_or_init(|| {
        AnswerAnalyzer::new()
            .map_err(|e| log::error!("Failed to build default analyzer: {}", e))
            .ok()
    });

    match analyzer {
        Some(analyzer) => analyzer.analyze_answer(text, question, video_signal, duration_seconds.unwrap_or(0.0)),
        None => AnalysisBundle::empty(),
    }
}
