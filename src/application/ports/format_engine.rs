use async_trait::async_trait;

use crate::application::dto::options::FormatOptions;

#[async_trait]
pub trait FormatEngine: Send + Sync {
    /// Project-level configuration that applies to `path`, if any exists.
    async fn resolve_config(&self, path: &str) -> anyhow::Result<Option<FormatOptions>>;

    /// Returns `content` as the engine would write it. Fails on input that is
    /// not valid for the selected parser.
    async fn format(&self, content: &str, options: &FormatOptions) -> anyhow::Result<String>;
}
