//! Report data shared by every output format

use crate::error::CliError;
use serde::Serialize;
use std::fmt;

/// Input a report was computed from, kept in its raw form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportInput {
    /// Single integer
    Number(i64),
    /// Integer sequence
    Sequence(Vec<i32>),
    /// Free text
    Text(String),
}

impl fmt::Display for ReportInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportInput::Number(n) => write!(f, "{n}"),
            ReportInput::Sequence(seq) => write!(f, "{seq:?}"),
            // Quoted so leading and trailing whitespace stays visible
            ReportInput::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Result of one algorithm variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodResult {
    /// Variant name
    pub method: String,
    /// Computed value, `None` when the input has no result
    pub value: Option<i64>,
}

/// Cross-check outcome over a set of variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agreement {
    /// Whether every checked variant produced the same value
    pub agreed: bool,
    /// Whether a disagreement is a fault rather than an expected divergence
    pub enforced: bool,
    /// Variants taking part in the check
    pub methods: Vec<String>,
    /// Extra remarks, e.g. a documented divergence
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Everything one subcommand prints
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Subcommand that produced the report
    pub command: String,
    /// Input the variants ran on
    pub input: ReportInput,
    /// One entry per variant
    pub results: Vec<MethodResult>,
    /// Labelled extra facts, such as the winning subarray
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<(String, String)>,
    /// Every contiguous subarray, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subarrays: Option<Vec<Vec<i32>>>,
    /// Cross-check outcome
    pub agreement: Agreement,
}

impl Report {
    /// Create a report with results checked against each other
    pub fn new(
        command: impl Into<String>,
        input: ReportInput,
        results: Vec<MethodResult>,
        enforced: bool,
    ) -> Self {
        let agreement = Agreement::over(&results, enforced);
        Self {
            command: command.into(),
            input,
            results,
            details: Vec::new(),
            subarrays: None,
            agreement,
        }
    }

    /// Attach a labelled detail line
    pub fn with_detail(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.push((label.into(), value.into()));
        self
    }

    /// Fail when an enforced agreement does not hold
    pub fn ensure_agreement(&self) -> Result<(), CliError> {
        if self.agreement.agreed || !self.agreement.enforced {
            return Ok(());
        }
        let details = self
            .results
            .iter()
            .map(|r| format!("{}={}", r.method, render_value(r.value)))
            .collect::<Vec<_>>()
            .join(", ");
        Err(CliError::Disagreement {
            module: self.command.clone(),
            details,
        })
    }
}

impl Agreement {
    /// Check that every result carries the same value
    pub fn over(results: &[MethodResult], enforced: bool) -> Self {
        let agreed = results.windows(2).all(|pair| pair[0].value == pair[1].value);
        Self {
            agreed,
            enforced,
            methods: results.iter().map(|r| r.method.clone()).collect(),
            notes: Vec::new(),
        }
    }
}

/// Display form of an optional value
pub fn render_value(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "no result".to_string(),
    }
}
