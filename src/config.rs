//! Configuration management for the interview scorer

use crate::error::{InterviewScorerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub weights: ScoringWeights,
    pub analysis: AnalysisConfig,
    pub feedback: FeedbackConfig,
    pub output: OutputConfig,
}

/// Weights applied to each sub-score's headline field by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub content_quality: f64,
    pub relevance: f64,
    pub clarity: f64,
    pub sentiment: f64,
    pub professionalism: f64,
    pub speech: f64,
    pub facial: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Multiplier applied to raw question/answer overlap before clamping.
    pub relevance_boost: f64,
    /// Score assumed for a missing speech or facial sub-bundle.
    pub neutral_signal_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    pub max_items: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            content_quality: 0.25,
            relevance: 0.20,
            clarity: 0.15,
            sentiment: 0.10,
            professionalism: 0.10,
            speech: 0.15,
            facial: 0.05,
        }
    }
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn total(&self) -> f64 {
        self.content_quality
            + self.relevance
            + self.clarity
            + self.sentiment
            + self.professionalism
            + self.speech
            + self.facial
    }

    /// Weights must be non-negative and form a convex combination.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("content_quality", self.content_quality),
            ("relevance", self.relevance),
            ("clarity", self.clarity),
            ("sentiment", self.sentiment),
            ("professionalism", self.professionalism),
            ("speech", self.speech),
            ("facial", self.facial),
        ];

        if let Some((name, value)) = all.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(InterviewScorerError::Configuration(format!(
                "Weight '{}' must be a non-negative number, got {}",
                name, value
            )));
        }

        let total = self.total();
        if (total - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(InterviewScorerError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {:.4}",
                total
            )));
        }

        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            relevance_boost: 1.5,
            neutral_signal_score: 70.0,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self { max_items: 5 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            analysis: AnalysisConfig::default(),
            feedback: FeedbackConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults on first use.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| InterviewScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            log::warn!("No configuration at {}, writing defaults", config_path.display());
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| InterviewScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("interview-scorer")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        if !self.analysis.relevance_boost.is_finite() || self.analysis.relevance_boost <= 0.0 {
            return Err(InterviewScorerError::Configuration(
                "analysis.relevance_boost must be positive".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.analysis.neutral_signal_score) {
            return Err(InterviewScorerError::Configuration(
                "analysis.neutral_signal_score must be within 0-100".to_string(),
            ));
        }
        if self.feedback.max_items == 0 {
            return Err(InterviewScorerError::Configuration(
                "feedback.max_items must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Set a single value addressed as `section.field`, e.g. `weights.clarity`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        fn parse_f64(key: &str, value: &str) -> Result<f64> {
            value.parse::<f64>().map_err(|_| {
                InterviewScorerError::Configuration(format!("'{}' expects a number, got '{}'", key, value))
            })
        }
        fn parse_bool(key: &str, value: &str) -> Result<bool> {
            value.parse::<bool>().map_err(|_| {
                InterviewScorerError::Configuration(format!("'{}' expects true or false, got '{}'", key, value))
            })
        }

        match key {
            "weights.content_quality" => self.weights.content_quality = parse_f64(key, value)?,
            "weights.relevance" => self.weights.relevance = parse_f64(key, value)?,
            "weights.clarity" => self.weights.clarity = parse_f64(key, value)?,
            "weights.sentiment" => self.weights.sentiment = parse_f64(key, value)?,
            "weights.professionalism" => self.weights.professionalism = parse_f64(key, value)?,
            "weights.speech" => self.weights.speech = parse_f64(key, value)?,
            "weights.facial" => self.weights.facial = parse_f64(key, value)?,
            "analysis.relevance_boost" => self.analysis.relevance_boost = parse_f64(key, value)?,
            "analysis.neutral_signal_score" => self.analysis.neutral_signal_score = parse_f64(key, value)?,
            "feedback.max_items" => {
                self.feedback.max_items = value.parse::<usize>().map_err(|_| {
                    InterviewScorerError::Configuration(format!("'{}' expects a count, got '{}'", key, value))
                })?
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(InterviewScorerError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.color_output" => self.output.color_output = parse_bool(key, value)?,
            _ => {
                return Err(InterviewScorerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-9);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let weights = ScoringWeights {
            clarity: 0.5,
            ..ScoringWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(InterviewScorerError::Configuration(_))
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            content_quality: 0.35,
            facial: -0.05,
            ..ScoringWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_load_writes_defaults_then_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.feedback.max_items, 5);

        let mut edited = created.clone();
        edited.set_value("analysis.relevance_boost", "1.2").unwrap();
        edited.set_value("output.format", "json").unwrap();
        edited.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.analysis.relevance_boost, 1.2);
        assert_eq!(reloaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_set_value_rejects_unknown_key() {
        let mut config = Config::default();
        assert!(config.set_value("weights.charisma", "0.1").is_err());
        assert!(config.set_value("weights.clarity", "high").is_err());
    }
}
