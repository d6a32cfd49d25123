//! Input manager for answer transcripts and session files

use crate::error::{InterviewScorerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::analyzer::AnswerInput;
use crate::processing::facial::VideoSignal;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A recorded interview: one entry per question asked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTranscript {
    #[serde(default)]
    pub id: Option<String>,
    pub answers: Vec<TranscriptAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptAnswer {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    #[serde(default)]
    pub video_signal: Option<VideoSignal>,
}

impl TranscriptAnswer {
    pub fn to_input(&self) -> AnswerInput {
        AnswerInput {
            text: self.answer.clone(),
            question: self.question.clone(),
            video_signal: self.video_signal.clone(),
            duration_seconds: self.duration_seconds.unwrap_or(0.0),
        }
    }
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read an answer transcript from a `.txt` or `.md` file.
    pub async fn load_answer(&mut self, path: &Path) -> Result<String> {
        let file_type = FileType::from_path(path);
        if !file_type.is_transcript() {
            return Err(InterviewScorerError::UnsupportedFormat(format!(
                "Expected a .txt or .md transcript: {}",
                path.display()
            )));
        }

        self.read_cached(path, file_type).await
    }

    /// Read a `.json` session file with one entry per answered question.
    pub async fn load_session(&mut self, path: &Path) -> Result<SessionTranscript> {
        let file_type = FileType::from_path(path);
        if file_type != FileType::Json {
            return Err(InterviewScorerError::UnsupportedFormat(format!(
                "Expected a .json session file: {}",
                path.display()
            )));
        }

        let content = self.read_cached(path, file_type).await?;
        let transcript: SessionTranscript = serde_json::from_str(&content)?;

        if transcript.answers.is_empty() {
            return Err(InterviewScorerError::InvalidInput(format!(
                "Session file has no answers: {}",
                path.display()
            )));
        }

        info!("Loaded {} answers from {}", transcript.answers.len(), path.display());
        Ok(transcript)
    }

    /// Parse a standalone video signal JSON object.
    pub async fn load_video_signal(&mut self, path: &Path) -> Result<VideoSignal> {
        let content = self.read_cached(path, FileType::from_path(path)).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn read_cached(&mut self, path: &Path, file_type: FileType) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached content for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(InterviewScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match file_type {
            FileType::Markdown => {
                info!("Processing markdown transcript: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Text | FileType::Json => {
                info!("Reading file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(InterviewScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
