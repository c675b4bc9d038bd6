//! Plain text output formatter

use super::report::render_value;
use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one line per result
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        writeln!(self.writer, "Input: {}", report.input)?;

        if let Some(subarrays) = &report.subarrays {
            writeln!(self.writer, "Possible subarrays ({}):", subarrays.len())?;
            for subarray in subarrays {
                writeln!(self.writer, "  {subarray:?}")?;
            }
        }

        for result in &report.results {
            writeln!(
                self.writer,
                "{}: {}",
                result.method,
                render_value(result.value)
            )?;
        }

        for (label, value) in &report.details {
            writeln!(self.writer, "{label}: {value}")?;
        }

        let verdict = if report.agreement.agreed { "yes" } else { "no" };
        writeln!(
            self.writer,
            "Agreement ({}): {verdict}",
            report.agreement.methods.join(", ")
        )?;
        for note in &report.agreement.notes {
            writeln!(self.writer, "Note: {note}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
