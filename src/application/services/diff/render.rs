use colored::Colorize;

use crate::application::dto::diff::{DiffLineKind, DiffResult, DiffStats};

fn already_formatted_line(result: &DiffResult) -> String {
    format!("✓ {} is already formatted", result.file_path())
}

fn needs_formatting_line(result: &DiffResult) -> String {
    format!("⚠ {} needs formatting:", result.file_path())
}

pub fn generate_colored_diff(result: &DiffResult) -> String {
    if !result.has_differences() {
        return already_formatted_line(result).green().to_string();
    }

    let mut lines = Vec::new();
    lines.push(needs_formatting_line(result).yellow().to_string());
    for (kind, line) in result.lines() {
        let styled = match kind {
            DiffLineKind::FileHeader => line.bold().to_string(),
            DiffLineKind::Hunk => line.cyan().to_string(),
            DiffLineKind::Added => line.green().to_string(),
            DiffLineKind::Removed => line.red().to_string(),
            DiffLineKind::Context => line.to_string(),
        };
        lines.push(styled);
    }
    lines.push(String::new());
    lines.join("\n")
}

pub fn generate_plain_diff(result: &DiffResult) -> String {
    if !result.has_differences() {
        return already_formatted_line(result);
    }

    [
        needs_formatting_line(result).as_str(),
        result.diff_output(),
        "",
    ]
    .join("\n")
}

pub fn generate_stats(results: &[DiffResult]) -> String {
    let stats = DiffStats::from_results(results);
    [
        "Formatting Summary:".bold().to_string(),
        total_line(&stats),
        format!("  {}", already_formatted_count(&stats).green()),
        format!("  {}", needs_formatting_count(&stats).yellow()),
    ]
    .join("\n")
}

/// Same summary as [`generate_stats`] without any styling, whatever the
/// global color override says.
pub fn generate_plain_stats(results: &[DiffResult]) -> String {
    let stats = DiffStats::from_results(results);
    [
        "Formatting Summary:".to_string(),
        total_line(&stats),
        format!("  {}", already_formatted_count(&stats)),
        format!("  {}", needs_formatting_count(&stats)),
    ]
    .join("\n")
}

fn total_line(stats: &DiffStats) -> String {
    format!("  Total files: {}", stats.total)
}

fn already_formatted_count(stats: &DiffStats) -> String {
    format!("✓ Already formatted: {}", stats.already_formatted)
}

fn needs_formatting_count(stats: &DiffStats) -> String {
    format!("⚠ Needs formatting: {}", stats.needs_formatting)
}
