use std::sync::Arc;

use crate::application::dto::options::FormatOptions;
use crate::application::errors::FormatError;
use crate::application::ports::format_engine::FormatEngine;

/// Produces the text the formatting engine would write for a file, without
/// writing anything.
#[derive(Clone)]
pub struct FormatAdapter {
    engine: Arc<dyn FormatEngine>,
}

impl FormatAdapter {
    pub fn new(engine: Arc<dyn FormatEngine>) -> Self {
        Self { engine }
    }

    pub async fn format_file(
        &self,
        path: &str,
        content: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let project = self
            .engine
            .resolve_config(path)
            .await
            .map_err(|source| FormatError::Engine {
                path: path.to_string(),
                source,
            })?
            .unwrap_or_default();

        // Without an explicit parser the engine infers one from `filepath`.
        let mut merged = options.merged_over(&project);
        merged.filepath = Some(path.to_string());

        tracing::debug!(path = %path, parser = ?merged.parser, "format_start");
        self.engine
            .format(content, &merged)
            .await
            .map_err(|source| FormatError::Engine {
                path: path.to_string(),
                source,
            })
    }
}
