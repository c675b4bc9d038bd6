//! Factorial command implementation

use crate::config::CliConfig;
use crate::output::{MethodResult, Report, ReportInput};
use anyhow::{Context, Result};
use clap::Args;
use katas_core::FactorialMethod;

/// Arguments for the factorial command
#[derive(Debug, Args)]
pub struct FactorialArgs {
    /// Non-negative integer, at most 20 (default: from config, else 5)
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub n: Option<i64>,
}

impl FactorialArgs {
    /// Run every factorial method on the input
    pub fn run(&self, config: &CliConfig) -> Result<Report> {
        let n = self.n.unwrap_or(config.factorial.default_input);
        log::info!("Computing {n}! with {} methods", FactorialMethod::ALL.len());

        let mut results = Vec::with_capacity(FactorialMethod::ALL.len());
        for method in FactorialMethod::ALL {
            let value = method.compute(n)?;
            let value = i64::try_from(value)
                .with_context(|| format!("{n}! does not fit the report value range"))?;
            results.push(MethodResult {
                method: method.name().to_string(),
                value: Some(value),
            });
        }

        Ok(Report::new("factorial", ReportInput::Number(n), results, true))
    }
}
