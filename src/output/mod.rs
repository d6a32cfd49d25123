//! Report model and renderers

pub mod formatter;
pub mod report;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{InterviewReport, ReportMetadata};
