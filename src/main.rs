//! Interview scorer: multi-signal scoring and feedback for interview answers

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use interview_scorer::cli::{self, Cli, Commands, ConfigAction};
use interview_scorer::config::{Config, OutputFormat};
use interview_scorer::error::{InterviewScorerError, Result};
use interview_scorer::input::InputManager;
use interview_scorer::output::{save_report_to_file, suggest_filename, InterviewReport, ReportGenerator, ReportMetadata};
use interview_scorer::processing::analyzer::{AnswerAnalyzer, AnswerInput};
use interview_scorer::processing::feedback::FeedbackGenerator;
use interview_scorer::session::{InterviewSession, ScoredAnswer};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Score {
            answer,
            text,
            question,
            duration,
            video,
            detailed,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let mut input_manager = InputManager::new();

            let (answer_text, source) = match (answer, text) {
                (Some(path), _) if path.as_os_str() == "-" => (read_stdin().await?, "stdin".to_string()),
                (Some(path), _) => (
                    input_manager.load_answer(&path).await?,
                    path.to_string_lossy().to_string(),
                ),
                (None, Some(text)) => (text, "inline".to_string()),
                (None, None) => {
                    return Err(InterviewScorerError::InvalidInput(
                        "Provide an answer with --answer or --text".to_string(),
                    ))
                }
            };

            let mut input = AnswerInput::new(answer_text, question);
            if let Some(seconds) = duration {
                input = input.with_duration(seconds);
            }
            if let Some(path) = video {
                input = input.with_video(input_manager.load_video_signal(&path).await?);
            }

            let started = Instant::now();
            let analyzer = AnswerAnalyzer::from_config(&config)?;
            let feedback = FeedbackGenerator::with_limit(config.feedback.max_items);

            let mut session = InterviewSession::new(session_id_for(&source));
            session.record(score_one(&analyzer, &feedback, &input));

            info!("Scored answer in {}ms", started.elapsed().as_millis());
            render(&session, &analyzer, &config, format, detailed, save.as_deref(), &source, started)?;
        }

        Commands::Session {
            file,
            detailed,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let transcript = InputManager::new().load_session(&file).await?;

            let started = Instant::now();
            let analyzer = Arc::new(AnswerAnalyzer::from_config(&config)?);
            let feedback = Arc::new(FeedbackGenerator::with_limit(config.feedback.max_items));

            let progress = ProgressBar::new(transcript.answers.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} answers {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let handles: Vec<_> = transcript
                .answers
                .iter()
                .map(|entry| {
                    let analyzer = Arc::clone(&analyzer);
                    let feedback = Arc::clone(&feedback);
                    let progress = progress.clone();
                    let input = entry.to_input();
                    tokio::task::spawn_blocking(move || {
                        let scored = score_one(&analyzer, &feedback, &input);
                        progress.inc(1);
                        scored
                    })
                })
                .collect();

            let mut session = InterviewSession::new(
                transcript
                    .id
                    .clone()
                    .unwrap_or_else(|| session_id_for(&file.to_string_lossy())),
            );
            for handle in handles {
                let scored = handle
                    .await
                    .map_err(|e| InterviewScorerError::Processing(format!("Scoring task failed: {}", e)))?;
                session.record(scored);
            }
            progress.finish_with_message("done");

            info!(
                "Scored {} answers in {}ms",
                session.answers.len(),
                started.elapsed().as_millis()
            );
            render(
                &session,
                &analyzer,
                &config,
                format,
                detailed,
                save.as_deref(),
                &file.to_string_lossy(),
                started,
            )?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| InterviewScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut updated = config;
                updated.set_value(&key, &value)?;
                updated.validate()?;
                updated.save_to(config_path)?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn score_one(analyzer: &AnswerAnalyzer, feedback: &FeedbackGenerator, input: &AnswerInput) -> ScoredAnswer {
    let bundle = analyzer.analyze(input);
    ScoredAnswer {
        question: input.question.clone(),
        answer: input.text.clone(),
        feedback: feedback.generate(&bundle),
        bundle,
    }
}

async fn read_stdin() -> Result<String> {
    use tokio::io::AsyncReadExt;

    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text.trim().to_string())
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(InterviewScorerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn session_id_for(source: &str) -> String {
    let stem = Path::new(source)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "answer".to_string());
    format!("{}-{}", stem, chrono::Utc::now().format("%Y%m%d%H%M%S"))
}

#[allow(clippy::too_many_arguments)]
fn render(
    session: &InterviewSession,
    analyzer: &AnswerAnalyzer,
    config: &Config,
    format: OutputFormat,
    detailed: bool,
    save: Option<&Path>,
    source: &str,
    started: Instant,
) -> Result<()> {
    let metadata = ReportMetadata::new(
        source,
        session.answers.len(),
        started.elapsed().as_millis() as u64,
        analyzer.sentiment_model_name(),
    );
    let report = InterviewReport::from_session(
        session,
        analyzer.weights(),
        config.analysis.neutral_signal_score,
        metadata,
    );

    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true, true);
    let rendered = generator.generate_report(&report, format)?;

    match save {
        Some(path) => {
            let target: PathBuf = if path.is_dir() {
                path.join(suggest_filename(format, source, true))
            } else {
                path.to_path_buf()
            };
            save_report_to_file(&rendered, &target)?;
            println!("💾 Report saved to {}", target.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
