use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::FutureExt;
use serde::Serialize;
use tokio::task::JoinSet;

use crate::application::dto::diff::DiffResult;
use crate::application::dto::options::FormatOptions;
use crate::application::errors::FormatError;
use crate::application::services::format::FormatAdapter;
use crate::application::use_cases::diffcheck::check_file_diff::CheckFileDiff;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Checks every file concurrently. A file that cannot be formatted shows up
/// as "no differences" in its own slot; the batch itself never fails.
pub struct CheckMultipleFilesDiff<'a> {
    pub adapter: &'a FormatAdapter,
    pub timeout: Option<Duration>,
}

impl<'a> CheckMultipleFilesDiff<'a> {
    pub async fn execute(&self, files: &[SourceFile], options: &FormatOptions) -> Vec<DiffResult> {
        let mut tasks = JoinSet::new();
        for (index, file) in files.iter().cloned().enumerate() {
            let adapter = self.adapter.clone();
            let options = options.clone();
            let timeout = self.timeout;
            tasks.spawn(async move {
                let outcome = check_isolated(&adapter, &file, &options, timeout).await;
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<DiffResult>> = vec![None; files.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(result))) => slots[index] = Some(result),
                Ok((_, Err(err))) => {
                    tracing::error!(path = %err.path(), error = %err, "format_failed");
                }
                Err(err) => {
                    tracing::error!(error = ?err, "format_task_join_failed");
                }
            }
        }

        slots
            .into_iter()
            .zip(files)
            .map(|(slot, file)| {
                slot.unwrap_or_else(|| DiffResult::unchanged(&file.path, &file.content))
            })
            .collect()
    }
}

/// Checks one file, turning a timeout or a panic inside the engine into a
/// `FormatError` that still names the file.
async fn check_isolated(
    adapter: &FormatAdapter,
    file: &SourceFile,
    options: &FormatOptions,
    timeout: Option<Duration>,
) -> Result<DiffResult, FormatError> {
    let check = CheckFileDiff { adapter };
    let run = async {
        let work = check.execute(&file.path, &file.content, options);
        match timeout {
            Some(after) => tokio::time::timeout(after, work)
                .await
                .unwrap_or_else(|_| {
                    Err(FormatError::TimedOut {
                        path: file.path.clone(),
                        after,
                    })
                }),
            None => work.await,
        }
    };

    match AssertUnwindSafe(run).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(panic) => Err(FormatError::Panicked {
            path: file.path.clone(),
            message: panic_message(panic.as_ref()),
        }),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
