//! Transcript text extraction

use crate::error::Result;
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content.trim().to_string())
    }
}

/// Strips Markdown markup, keeping the spoken text. Paragraphs, headings and
/// list items each end their own line.
pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph) | Event::End(Tag::Heading(..)) | Event::End(Tag::Item) => {
                text.push('\n')
            }
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
