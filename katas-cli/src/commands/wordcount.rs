//! Word-count command implementation

use crate::config::CliConfig;
use crate::output::{Agreement, MethodResult, Report, ReportInput};
use anyhow::{Context, Result};
use clap::Args;
use katas_core::{require_text, WordCountStrategy};

/// Arguments for the wordcount command
#[derive(Debug, Args)]
pub struct WordCountArgs {
    /// Text to count words in (default: from config)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,
}

impl WordCountArgs {
    /// Run every word-count strategy on the input
    pub fn run(&self, config: &CliConfig) -> Result<Report> {
        let text = self
            .text
            .as_deref()
            .unwrap_or(&config.word_count.default_text);
        let text = require_text(Some(text))?;
        log::info!("Counting words in {} bytes of text", text.len());

        let mut results = Vec::with_capacity(WordCountStrategy::ALL.len());
        let mut aware = Vec::new();
        for strategy in WordCountStrategy::ALL {
            let count = strategy.count(text)?;
            let result = MethodResult {
                method: strategy.name().to_string(),
                value: Some(i64::try_from(count).context("word count out of range")?),
            };
            if strategy.is_whitespace_aware() {
                aware.push(result.clone());
            }
            results.push(result);
        }

        let mut agreement = Agreement::over(&aware, false);
        if let Some(note) = simple_split_note(&results, &aware) {
            agreement.notes.push(note);
        }

        let mut report = Report::new(
            "wordcount",
            ReportInput::Text(text.to_string()),
            results,
            false,
        );
        report.agreement = agreement;
        Ok(report)
    }
}

/// Explain a simple-split count that differs from the whitespace-aware ones
fn simple_split_note(results: &[MethodResult], aware: &[MethodResult]) -> Option<String> {
    let simple = results.first()?.value?;
    let reference = aware.first()?.value?;
    if aware.iter().any(|r| r.value != Some(reference)) || simple == reference {
        return None;
    }
    Some(format!(
        "{} counts {simple} instead of {reference}: repeated spaces produce empty tokens",
        WordCountStrategy::SimpleSplit.name()
    ))
}
