use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait SourceFiles: Send + Sync {
    async fn read_to_string(&self, path: &Path) -> anyhow::Result<String>;

    /// Sorted, de-duplicated files matching `pattern`.
    fn expand(&self, pattern: &str) -> anyhow::Result<Vec<PathBuf>>;
}

/// Whether a CLI target should go through glob expansion rather than be read
/// as a literal path. A `{` only counts when it opens a `{a,b}` group.
pub fn is_glob_pattern(target: &str) -> bool {
    target.contains(['*', '?', '[']) || expand_braces(target).len() > 1
}

/// Expands shell-style `{a,b}` alternatives, nested groups included, into
/// plain glob patterns. Braces without a top-level comma, or without a
/// closing `}`, are left as literal text.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let bytes = pattern.as_bytes();
    for (open, _) in pattern.match_indices('{') {
        let mut depth = 0usize;
        let mut commas = Vec::new();
        let mut close = None;
        for (i, &b) in bytes.iter().enumerate().skip(open) {
            match b {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(i);
                        break;
                    }
                }
                b',' if depth == 1 => commas.push(i),
                _ => {}
            }
        }
        let Some(close) = close else { continue };
        if commas.is_empty() {
            continue;
        }

        let prefix = &pattern[..open];
        let suffix = &pattern[close + 1..];
        let mut bounds = vec![open];
        bounds.extend(commas);
        bounds.push(close);
        return bounds
            .windows(2)
            .flat_map(|w| expand_braces(&format!("{prefix}{}{suffix}", &pattern[w[0] + 1..w[1]])))
            .collect();
    }
    vec![pattern.to_string()]
}
