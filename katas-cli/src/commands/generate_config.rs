//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command.
    ///
    /// Confirmation lines go to `writer` unless `quiet` is set.
    pub fn execute<W: Write>(&self, quiet: bool, mut writer: W) -> Result<()> {
        use std::fs;

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;
        log::info!("Configuration template written to {}", self.output.display());

        if !quiet {
            writeln!(
                writer,
                "✓ Configuration template written to {}",
                self.output.display()
            )?;
            writeln!(writer, "Use it with:")?;
            writeln!(writer, "   katas --config {} factorial", self.output.display())?;
            writer.flush()?;
        }

        Ok(())
    }

    /// Template configuration content, spelling out every default
    pub fn template() -> &'static str {
        r#"# katas demo configuration
#
# Values given on the command line always win over this file.

[factorial]
# Input for `katas factorial` with no argument (0..=20)
default_input = 5

[subarray]
# Sequence for `katas maxsubarray` with no values
default_values = [-2, 1, -3, 4, -1, 2, 1, -5, 4]
# List every contiguous subarray before the results
show_subarrays = false

[word_count]
# Text for `katas wordcount` with no argument
default_text = " abc  def ghi "

[output]
# "text" or "json"
default_format = "text"
"#
    }
}
