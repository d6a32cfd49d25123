//! Input processing module
//! Loads answer transcripts and recorded interview sessions

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::{InputManager, SessionTranscript, TranscriptAnswer};
