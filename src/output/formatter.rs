//! Output formatters for interview reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::session::PerformanceRating;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an interview report
pub trait OutputFormatter {
    fn format_report(&self, report: &InterviewReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
    detailed: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn rating_color(rating: PerformanceRating) -> Color {
        match rating {
            PerformanceRating::Excellent => Color::Green,
            PerformanceRating::Good => Color::Blue,
            PerformanceRating::Average => Color::Yellow,
            PerformanceRating::NeedsImprovement => Color::Red,
        }
    }

    fn format_rating_badge(&self, rating: PerformanceRating) -> String {
        let label = rating.to_string().to_uppercase();
        if self.use_colors {
            format!("[{}]", label.color(Self::rating_color(rating)).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn score_bar(score: f64) -> String {
        let filled = (score.clamp(0.0, 100.0) / 10.0).round() as usize;
        format!("{}{}", "■".repeat(filled), "□".repeat(10 - filled))
    }

    fn format_answer(&self, answer: &AnswerReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("Q{}: {}", answer.index, answer.question), 3));
        output.push_str(&format!(
            "Score: {:.1}/100 {}\n",
            answer.overall_score,
            self.format_rating_badge(answer.rating)
        ));

        for component in &answer.components {
            output.push_str(&format!(
                "  {:<16} {} {:>5.1} (weight {:.0}%)\n",
                component.name,
                Self::score_bar(component.score),
                component.score,
                component.weight * 100.0
            ));
        }

        if self.detailed {
            let analysis = &answer.analysis;
            output.push_str(&format!(
                "  Words: {} | Sentences: {} | Vocabulary richness: {:.3}\n",
                analysis.text_metrics.word_count,
                analysis.text_metrics.sentence_count,
                analysis.text_metrics.vocabulary_richness
            ));
            output.push_str(&format!(
                "  STAR method: {} | Examples: {} | Quantified results: {}\n",
                yes_no(analysis.content_quality.uses_star_method),
                yes_no(analysis.content_quality.has_specific_examples),
                yes_no(analysis.content_quality.has_quantifiable_results)
            ));
            if let Some(speech) = &analysis.speech {
                output.push_str(&format!(
                    "  Fillers: {} | Stutters: {} | Pauses: {} | Pace: {} ({:.0} wpm)\n",
                    speech.filler_word_count,
                    speech.stuttering_instances,
                    speech.pause_indicators,
                    speech.speaking_pace,
                    speech.speaking_rate
                ));
            }
            if let Some(facial) = analysis.facial.as_ref().filter(|f| f.is_measured()) {
                output.push_str(&format!(
                    "  Eye contact: {} | Nervousness: {} | Expression: {}\n",
                    facial.eye_contact, facial.nervousness, facial.expressions
                ));
            }
        }

        output.push_str(&self.colorize("  Feedback:\n", Color::Cyan));
        for item in &answer.feedback {
            output.push_str(&format!("    • {}\n", item));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &InterviewReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;
        let metrics = &summary.metrics;

        output.push_str(&self.format_header("🎤 INTERVIEW PERFORMANCE REPORT", 1));
        output.push_str(&format!(
            "Session: {} | Generated: {} | Processing time: {}ms\n",
            report.session_id,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Overall Performance", 2));
        output.push_str(&format!(
            "Overall Score: {:.1}/100 {}\n",
            metrics.overall_score,
            self.format_rating_badge(summary.rating)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&report.verdict, Color::Cyan)));
        output.push_str(&format!("Answers scored: {}\n", metrics.answer_count));

        output.push_str(&self.format_header("Average Scores", 3));
        for (name, score) in [
            ("Content", metrics.content_quality),
            ("Relevance", metrics.relevance),
            ("Clarity", metrics.clarity),
            ("Confidence", metrics.confidence),
            ("Professionalism", metrics.professionalism),
            ("Fluency", metrics.fluency),
        ] {
            output.push_str(&format!("  {:<16} {} {:>5.1}\n", name, Self::score_bar(score), score));
        }
        if let Some(eye_contact) = metrics.eye_contact {
            output.push_str(&format!(
                "  {:<16} {} {:>5.1}%\n",
                "Eye contact",
                Self::score_bar(eye_contact),
                eye_contact
            ));
        }

        output.push_str(&self.format_header("✅ Strengths", 3));
        for strength in &summary.strengths {
            output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
        }

        output.push_str(&self.format_header("🎯 Areas for Improvement", 3));
        for improvement in &summary.improvements {
            output.push_str(&format!("  • {}\n", self.colorize(improvement, Color::Yellow)));
        }

        output.push_str(&self.format_header("Answers", 2));
        for answer in &report.answers {
            output.push_str(&self.format_answer(answer));
        }

        output.push_str(&self.format_header("📋 Action Items", 2));
        for (i, item) in summary.action_items.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, item));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &InterviewReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, detailed: bool) -> Self {
        Self {
            include_metadata,
            detailed,
        }
    }

    fn markdown_rating_badge(rating: PerformanceRating) -> &'static str {
        match rating {
            PerformanceRating::Excellent => "🟢 Excellent",
            PerformanceRating::Good => "🔵 Good",
            PerformanceRating::Average => "🟡 Average",
            PerformanceRating::NeedsImprovement => "🔴 Needs Improvement",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &InterviewReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;
        let metrics = &summary.metrics;

        output.push_str("# 🎤 Interview Performance Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Session:** `{}` | **Source:** `{}` | **Answers:** {}\n\n",
                report.session_id, report.metadata.source, report.metadata.answer_count
            ));
        }

        output.push_str("## Overall Performance\n\n");
        output.push_str(&format!(
            "**Overall Score:** {:.1}/100 {}\n\n",
            metrics.overall_score,
            Self::markdown_rating_badge(summary.rating)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict));

        output.push_str("### Average Scores\n\n");
        output.push_str("| Metric | Score |\n");
        output.push_str("|--------|-------|\n");
        for (name, score) in [
            ("Content", metrics.content_quality),
            ("Relevance", metrics.relevance),
            ("Clarity", metrics.clarity),
            ("Confidence", metrics.confidence),
            ("Professionalism", metrics.professionalism),
            ("Fluency", metrics.fluency),
        ] {
            output.push_str(&format!("| {} | {:.1} |\n", name, score));
        }
        if let Some(eye_contact) = metrics.eye_contact {
            output.push_str(&format!("| Eye contact | {:.1}% |\n", eye_contact));
        }
        output.push('\n');

        output.push_str("### ✅ Strengths\n\n");
        for strength in &summary.strengths {
            output.push_str(&format!("- {}\n", strength));
        }
        output.push('\n');

        output.push_str("### 🎯 Areas for Improvement\n\n");
        for improvement in &summary.improvements {
            output.push_str(&format!("- {}\n", improvement));
        }
        output.push('\n');

        output.push_str("## Answers\n\n");
        for answer in &report.answers {
            output.push_str(&format!("### Q{}: {}\n\n", answer.index, answer.question));
            output.push_str(&format!(
                "**Score:** {:.1}/100 {}\n\n",
                answer.overall_score,
                Self::markdown_rating_badge(answer.rating)
            ));

            if self.detailed {
                output.push_str("| Component | Score | Weight |\n");
                output.push_str("|-----------|-------|--------|\n");
                for component in &answer.components {
                    output.push_str(&format!(
                        "| {} | {:.1} | {:.0}% |\n",
                        component.name,
                        component.score,
                        component.weight * 100.0
                    ));
                }
                output.push('\n');
            }

            for item in &answer.feedback {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }

        output.push_str("## 📋 Action Items\n\n");
        for (i, item) in summary.action_items.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, item));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true, false),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, detailed),
        }
    }

    pub fn generate_report(&self, report: &InterviewReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, source_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(source_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_report{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_report{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_report{}.md", base_name, timestamp_suffix),
    }
}
