use std::collections::HashSet;
use std::path::PathBuf;

use crate::application::errors::CheckError;
use crate::application::ports::source_files::{SourceFiles, is_glob_pattern};
use crate::application::use_cases::diffcheck::check_multiple_files_diff::SourceFile;

/// Resolves CLI targets into files with their contents.
///
/// A literal path that cannot be read aborts the run. A file that came out of
/// glob expansion and cannot be read is skipped with a warning.
pub struct LoadSourceFiles<'a, S: SourceFiles + ?Sized> {
    pub files: &'a S,
}

impl<'a, S: SourceFiles + ?Sized> LoadSourceFiles<'a, S> {
    pub async fn execute(&self, targets: &[String]) -> Result<Vec<SourceFile>, CheckError> {
        if targets.is_empty() {
            return Err(CheckError::Argument("No file paths provided".to_string()));
        }

        let mut seen = HashSet::new();
        let mut resolved: Vec<(PathBuf, bool)> = Vec::new();
        let mut unmatched = Vec::new();
        for target in targets {
            if !is_glob_pattern(target) {
                let path = PathBuf::from(target);
                if seen.insert(path.clone()) {
                    resolved.push((path, false));
                }
                continue;
            }

            let matches = self.files.expand(target).map_err(|err| {
                CheckError::Argument(format!("invalid pattern {target}: {err}"))
            })?;
            if matches.is_empty() {
                tracing::warn!(pattern = %target, "no_files_matched_pattern");
                unmatched.push(target.clone());
            }
            for path in matches {
                if seen.insert(path.clone()) {
                    resolved.push((path, true));
                }
            }
        }

        if resolved.is_empty() {
            return Err(CheckError::NoMatches(unmatched));
        }

        let mut loaded = Vec::with_capacity(resolved.len());
        for (path, from_glob) in resolved {
            match self.files.read_to_string(&path).await {
                Ok(content) => loaded.push(SourceFile::new(path.display().to_string(), content)),
                Err(err) if from_glob => {
                    tracing::warn!(path = %path.display(), error = %err, "read_failed_skipping");
                }
                Err(source) => return Err(CheckError::Read { path, source }),
            }
        }
        Ok(loaded)
    }
}
