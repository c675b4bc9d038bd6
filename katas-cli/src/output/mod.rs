//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod report;
pub mod text;

pub use json::JsonFormatter;
pub use report::{Agreement, MethodResult, Report, ReportInput};
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single report
    fn write_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

impl OutputFormat {
    /// Build the formatter for this format over `writer`
    pub fn formatter<'a, W: Write + 'a>(&self, writer: W) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}
