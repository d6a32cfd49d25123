//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileType {
    Text,
    Markdown,
    Json,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            "json" => FileType::Json,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    /// Answer transcripts are prose; session files are structured.
    pub fn is_transcript(&self) -> bool {
        matches!(self, FileType::Text | FileType::Markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert_eq!(FileType::from_path(Path::new("answer.TXT")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("notes.markdown")), FileType::Markdown);
        assert_eq!(FileType::from_path(Path::new("session.json")), FileType::Json);
        assert_eq!(FileType::from_path(Path::new("answer.pdf")), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("README")), FileType::Unknown);
        assert!(!FileType::Json.is_transcript());
    }
}
