use std::io::{self, Write};

use crate::application::dto::diff::DiffResult;
use crate::application::services::diff::{
    generate_colored_diff, generate_plain_diff, generate_plain_stats, generate_stats,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    NoFiles,
    AllFormatted,
    FormattingNeeded,
}

impl ReportOutcome {
    pub fn needs_formatting(self) -> bool {
        matches!(self, ReportOutcome::FormattingNeeded)
    }
}

/// Writes the report for a finished batch. Deciding what the process exit
/// status should be is left to the caller via the returned outcome.
pub struct OutputDiffResults<'a, W: Write + ?Sized> {
    pub out: &'a mut W,
    pub colored: bool,
}

impl<'a, W: Write + ?Sized> OutputDiffResults<'a, W> {
    pub fn execute(&mut self, results: &[DiffResult]) -> io::Result<ReportOutcome> {
        if results.is_empty() {
            writeln!(self.out, "No files to check.")?;
            return Ok(ReportOutcome::NoFiles);
        }

        for result in results.iter().filter(|r| r.has_differences()) {
            let rendered = if self.colored {
                generate_colored_diff(result)
            } else {
                generate_plain_diff(result)
            };
            writeln!(self.out, "{rendered}")?;
        }

        let stats = if self.colored {
            generate_stats(results)
        } else {
            generate_plain_stats(results)
        };
        writeln!(self.out, "\n{stats}")?;

        if results.iter().any(|r| r.has_differences()) {
            Ok(ReportOutcome::FormattingNeeded)
        } else {
            Ok(ReportOutcome::AllFormatted)
        }
    }
}
