//! Maximum-subarray command implementation

use crate::config::CliConfig;
use crate::output::{MethodResult, Report, ReportInput};
use anyhow::Result;
use clap::Args;
use katas_core::{enumerate_subarrays, max_subarray_span, SubarrayMethod};
use std::str::FromStr;

/// Integers given as one comma-separated token, e.g. `-2,1,-3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueList(pub Vec<i32>);

impl FromStr for ValueList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|e| format!("'{token}' is not an integer: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ValueList)
    }
}

/// Arguments for the maxsubarray command
#[derive(Debug, Args)]
pub struct MaxSubarrayArgs {
    /// Sequence of integers: one comma-separated list or space-separated values
    /// (default: from config)
    // Single-valued so that flags after the list are still parsed as flags
    #[arg(value_name = "VALUES", allow_hyphen_values = true)]
    pub values: Option<ValueList>,

    /// Remaining space-separated values
    #[arg(value_name = "MORE", allow_negative_numbers = true, hide = true)]
    pub more: Vec<i32>,

    /// Use an empty sequence instead of the configured default
    #[arg(long, conflicts_with_all = ["values", "more"])]
    pub empty: bool,

    /// List every contiguous subarray before the results
    #[arg(short = 's', long)]
    pub show_subarrays: bool,
}

impl MaxSubarrayArgs {
    /// Values given on the command line, in order
    pub fn sequence(&self) -> Vec<i32> {
        let mut seq = self
            .values
            .as_ref()
            .map(|list| list.0.clone())
            .unwrap_or_default();
        seq.extend_from_slice(&self.more);
        seq
    }

    /// Run every maximum-subarray algorithm on the input
    pub fn run(&self, config: &CliConfig) -> Result<Report> {
        let given = self.sequence();
        let seq: &[i32] = if self.empty {
            &[]
        } else if given.is_empty() {
            &config.subarray.default_values
        } else {
            &given
        };
        log::info!("Finding the maximum subarray of {} elements", seq.len());

        let results = SubarrayMethod::ALL
            .iter()
            .map(|method| MethodResult {
                method: method.name().to_string(),
                value: method.compute(seq),
            })
            .collect();

        let mut report = Report::new(
            "maxsubarray",
            ReportInput::Sequence(seq.to_vec()),
            results,
            true,
        );

        if let Some(span) = max_subarray_span(seq) {
            report = report.with_detail(
                "Best subarray",
                format!("{:?} (indices {}..={})", span.slice(seq), span.start, span.end),
            );
        }

        if self.show_subarrays || config.subarray.show_subarrays {
            report.subarrays = Some(enumerate_subarrays(seq).map(<[i32]>::to_vec).collect());
        }

        Ok(report)
    }
}
