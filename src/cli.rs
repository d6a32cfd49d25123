//! CLI interface for the interview scorer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "interview-scorer")]
#[command(about = "Score interview answers and generate actionable feedback")]
#[command(
    long_about = "Score spoken interview answers on content, relevance, clarity, confidence, professionalism, fluency and facial engagement, then rank feedback for each answer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single answer
    Score {
        /// Answer transcript (TXT, MD), or - to read stdin
        #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
        answer: Option<PathBuf>,

        /// Answer text given inline
        #[arg(short, long)]
        text: Option<String>,

        /// The question that was asked
        #[arg(short, long)]
        question: String,

        /// Answer duration in seconds, enables speaking-rate analysis
        #[arg(long)]
        duration: Option<f64>,

        /// Video signal JSON (eye_contact_percentage, dominant_emotion, engagement_score)
        #[arg(long)]
        video: Option<PathBuf>,

        /// Include the full sub-analyses in the output
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Score every answer in a recorded session file
    Session {
        /// Session transcript (JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Include the full sub-analyses in the output
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or edit configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "weights.clarity")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_score_requires_some_answer() {
        assert!(Cli::try_parse_from(["interview-scorer", "score", "--question", "Why?"]).is_err());

        let cli = Cli::try_parse_from([
            "interview-scorer",
            "score",
            "--text",
            "Because I enjoy it.",
            "--question",
            "Why?",
            "--duration",
            "12.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Score { text, duration, answer, .. } => {
                assert_eq!(text.as_deref(), Some("Because I enjoy it."));
                assert_eq!(duration, Some(12.5));
                assert!(answer.is_none());
            }
            _ => panic!("expected score command"),
        }
    }
}
