//! CLI command implementations

use crate::config::CliConfig;
use crate::output::{OutputFormat, Report};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::io::Write;
use std::path::PathBuf;

pub mod factorial;
pub mod generate_config;
pub mod maxsubarray;
pub mod wordcount;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute n! iteratively and recursively
    Factorial(factorial::FactorialArgs),

    /// Find the maximum contiguous-subarray sum with every algorithm
    #[command(name = "maxsubarray")]
    MaxSubarray(maxsubarray::MaxSubarrayArgs),

    /// Count words with every tokenization strategy
    #[command(name = "wordcount")]
    WordCount(wordcount::WordCountArgs),

    /// Write a configuration template holding every default
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// Options shared by every command
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "KATAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

impl Commands {
    /// Execute the command, writing its report to `writer`
    pub fn execute<W: Write>(&self, global: &GlobalArgs, writer: W) -> Result<()> {
        let config = CliConfig::load(global.config.as_deref())?;
        log::debug!("Configuration: {:?}", config);

        let report = match self {
            Commands::Factorial(args) => args.run(&config)?,
            Commands::MaxSubarray(args) => args.run(&config)?,
            Commands::WordCount(args) => args.run(&config)?,
            Commands::GenerateConfig(args) => return args.execute(global.quiet, writer),
        };

        let format = global.format.unwrap_or(config.output.default_format);
        emit(&report, format, writer)?;
        report.ensure_agreement()?;
        Ok(())
    }
}

/// Write one report in the chosen format
pub fn emit<W: Write>(report: &Report, format: OutputFormat, writer: W) -> Result<()> {
    let mut formatter = format.formatter(writer);
    formatter.write_report(report)?;
    formatter.finish()
}
