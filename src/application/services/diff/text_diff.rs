use similar::{Algorithm, TextDiff};

use crate::application::dto::diff::DiffResult;

pub const DEFAULT_FILE_LABEL: &str = "file";
pub const CONTEXT_LINES: usize = 3;

pub fn generate_diff(original: &str, formatted: &str, file_path: &str) -> DiffResult {
    if original == formatted {
        return DiffResult::new(
            file_path.to_string(),
            String::new(),
            original.to_string(),
            formatted.to_string(),
        );
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(original, formatted);
    let patch = diff
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(&format!("a/{file_path}"), &format!("b/{file_path}"))
        .to_string();

    DiffResult::new(
        file_path.to_string(),
        patch,
        original.to_string(),
        formatted.to_string(),
    )
}

pub fn generate_diff_default(original: &str, formatted: &str) -> DiffResult {
    generate_diff(original, formatted, DEFAULT_FILE_LABEL)
}
