use std::sync::Arc;

use crate::application::ports::format_engine::FormatEngine;
use crate::application::ports::source_files::SourceFiles;
use crate::application::services::format::FormatAdapter;
use crate::application::use_cases::diffcheck::check_multiple_files_diff::CheckMultipleFilesDiff;
use crate::bootstrap::config::Config;
use crate::infrastructure::fs::LocalSourceFiles;
use crate::infrastructure::prettier::PrettierNodeEngine;

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub adapter: FormatAdapter,
    pub source_files: Arc<dyn SourceFiles>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let engine: Arc<dyn FormatEngine> = Arc::new(PrettierNodeEngine::new(
            config.node_bin.clone(),
            config.prettier_module.clone(),
        ));
        Self::with_ports(config, engine, Arc::new(LocalSourceFiles::new()))
    }

    pub fn with_ports(
        config: Config,
        engine: Arc<dyn FormatEngine>,
        source_files: Arc<dyn SourceFiles>,
    ) -> Self {
        Self {
            config,
            adapter: FormatAdapter::new(engine),
            source_files,
        }
    }

    pub fn batch(&self) -> CheckMultipleFilesDiff<'_> {
        CheckMultipleFilesDiff {
            adapter: &self.adapter,
            timeout: self.config.format_timeout,
        }
    }
}
