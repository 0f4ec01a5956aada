use crate::application::dto::diff::DiffResult;
use crate::application::dto::options::FormatOptions;
use crate::application::errors::FormatError;
use crate::application::services::diff::generate_diff;
use crate::application::services::format::FormatAdapter;

pub struct CheckFileDiff<'a> {
    pub adapter: &'a FormatAdapter,
}

impl<'a> CheckFileDiff<'a> {
    pub async fn execute(
        &self,
        path: &str,
        original_content: &str,
        options: &FormatOptions,
    ) -> Result<DiffResult, FormatError> {
        let formatted = self
            .adapter
            .format_file(path, original_content, options)
            .await?;
        Ok(generate_diff(original_content, &formatted, path))
    }
}
