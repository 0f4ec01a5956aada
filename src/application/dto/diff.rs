use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    FileHeader,
    Hunk,
    Added,
    Removed,
    Context,
}

impl DiffLineKind {
    /// Classifies one line of unified diff text. File headers win over the
    /// single `+`/`-` prefixes so `---`/`+++` never read as removals/additions.
    pub fn of(line: &str) -> Self {
        if line.starts_with("---") || line.starts_with("+++") {
            DiffLineKind::FileHeader
        } else if line.starts_with("@@") {
            DiffLineKind::Hunk
        } else if line.starts_with('+') {
            DiffLineKind::Added
        } else if line.starts_with('-') {
            DiffLineKind::Removed
        } else {
            DiffLineKind::Context
        }
    }
}

/// Outcome of comparing a file's original text with what the formatter would
/// write for it.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    file_path: String,
    has_differences: bool,
    diff_output: String,
    original_content: String,
    formatted_content: String,
}

impl DiffResult {
    pub(crate) fn new(
        file_path: String,
        diff_output: String,
        original_content: String,
        formatted_content: String,
    ) -> Self {
        let has_differences = original_content != formatted_content;
        Self {
            file_path,
            has_differences,
            diff_output: if has_differences {
                diff_output
            } else {
                String::new()
            },
            original_content,
            formatted_content,
        }
    }

    /// Placeholder for a file that could not be formatted: reported as having
    /// no differences, with both sides equal to the input.
    pub fn unchanged(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            file_path: file_path.into(),
            has_differences: false,
            diff_output: String::new(),
            formatted_content: content.clone(),
            original_content: content,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn has_differences(&self) -> bool {
        self.has_differences
    }

    pub fn diff_output(&self) -> &str {
        &self.diff_output
    }

    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    pub fn formatted_content(&self) -> &str {
        &self.formatted_content
    }

    pub fn lines(&self) -> impl Iterator<Item = (DiffLineKind, &str)> {
        self.diff_output
            .split('\n')
            .map(|line| (DiffLineKind::of(line), line))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub total: usize,
    pub already_formatted: usize,
    pub needs_formatting: usize,
}

impl DiffStats {
    pub fn from_results(results: &[DiffResult]) -> Self {
        let total = results.len();
        let needs_formatting = results.iter().filter(|r| r.has_differences()).count();
        Self {
            total,
            already_formatted: total - needs_formatting,
            needs_formatting,
        }
    }
}
