use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;

use crate::application::ports::source_files::{SourceFiles, expand_braces};

/// Directories never worth formatting: dependencies, build output, coverage
/// reports and VCS metadata.
pub const IGNORED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "coverage"];

#[derive(Debug, Default, Clone)]
pub struct LocalSourceFiles;

impl LocalSourceFiles {
    pub fn new() -> Self {
        Self
    }
}

fn is_ignored(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name)),
        _ => false,
    })
}

#[async_trait]
impl SourceFiles for LocalSourceFiles {
    async fn read_to_string(&self, path: &Path) -> anyhow::Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("unable to read {}", path.display()))
    }

    fn expand(&self, pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
        let mut matched = BTreeSet::new();
        for alternative in expand_braces(pattern) {
            let entries = glob::glob(&alternative)
                .with_context(|| format!("invalid glob pattern {pattern}"))?;
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() && !is_ignored(&path) => {
                        matched.insert(path);
                    }
                    Ok(_) => {}
                    Err(err) => {
                        tracing::debug!(pattern = %pattern, error = %err, "glob_entry_unreadable");
                    }
                }
            }
        }
        Ok(matched.into_iter().collect())
    }
}
