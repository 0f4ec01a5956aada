use crate::application::dto::diff::DiffResult;
use crate::application::dto::options::FormatOptions;
use crate::application::use_cases::diffcheck::check_multiple_files_diff::{
    CheckMultipleFilesDiff, SourceFile,
};

pub struct HandleDiffCheck<'a> {
    pub batch: &'a CheckMultipleFilesDiff<'a>,
}

impl<'a> HandleDiffCheck<'a> {
    /// Returns `None` without touching the engine when `diff_check` is off.
    /// Paths without a matching entry in `original_contents` are checked as
    /// empty files.
    pub async fn execute(
        &self,
        file_paths: &[String],
        original_contents: &[String],
        options: &FormatOptions,
    ) -> Option<Vec<DiffResult>> {
        if !options.diff_check {
            return None;
        }

        let files: Vec<SourceFile> = file_paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                SourceFile::new(
                    path.clone(),
                    original_contents.get(index).cloned().unwrap_or_default(),
                )
            })
            .collect();

        Some(self.batch.execute(&files, options).await)
    }
}
