use std::process::Stdio;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::dto::options::FormatOptions;
use crate::application::ports::format_engine::FormatEngine;

/// Runs inside `node -e`. Reads one JSON request from stdin and answers with
/// `{ ok, value }` or `{ ok: false, error }` on stdout.
const BRIDGE_SCRIPT: &str = r#"
const chunks = [];
process.stdin.on('data', (chunk) => chunks.push(chunk));
process.stdin.on('end', async () => {
  const reply = (body) => process.stdout.write(JSON.stringify(body));
  try {
    const req = JSON.parse(Buffer.concat(chunks).toString('utf8'));
    const prettier = require(require.resolve(req.module, { paths: [process.cwd()] }));
    const value = req.op === 'resolveConfig'
      ? await prettier.resolveConfig(req.path)
      : await prettier.format(req.content, req.options);
    reply({ ok: true, value: value === undefined ? null : value });
  } catch (err) {
    reply({ ok: false, error: String((err && err.message) || err) });
  }
});
"#;

#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
enum BridgeRequest<'a> {
    ResolveConfig {
        module: &'a str,
        path: &'a str,
    },
    Format {
        module: &'a str,
        content: &'a str,
        options: &'a FormatOptions,
    },
}

#[derive(Debug, Deserialize)]
struct BridgeResponse {
    ok: bool,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    error: Option<String>,
}

fn parse_response(stdout: &[u8]) -> anyhow::Result<Value> {
    let response: BridgeResponse =
        serde_json::from_slice(stdout).context("unexpected output from prettier bridge")?;
    if response.ok {
        Ok(response.value)
    } else {
        Err(anyhow!(
            response
                .error
                .unwrap_or_else(|| "prettier failed without a message".to_string())
        ))
    }
}

/// Formats through a local Prettier install by shelling out to node.
#[derive(Debug, Clone)]
pub struct PrettierNodeEngine {
    node: String,
    module: String,
}

impl PrettierNodeEngine {
    pub fn new(node: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            module: module.into(),
        }
    }

    async fn call(&self, request: &BridgeRequest<'_>) -> anyhow::Result<Value> {
        let payload = serde_json::to_vec(request)?;
        let mut child = Command::new(&self.node)
            .arg("-e")
            .arg(BRIDGE_SCRIPT)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to start {}", self.node))?;

        let mut stdin = child.stdin.take().context("node stdin unavailable")?;
        stdin.write_all(&payload).await?;
        drop(stdin);

        let output = child.wait_with_output().await?;
        if output.stdout.is_empty() {
            anyhow::bail!(
                "{} exited with {}: {}",
                self.node,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        parse_response(&output.stdout)
    }
}

#[async_trait]
impl FormatEngine for PrettierNodeEngine {
    async fn resolve_config(&self, path: &str) -> anyhow::Result<Option<FormatOptions>> {
        let value = self
            .call(&BridgeRequest::ResolveConfig {
                module: &self.module,
                path,
            })
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        let options = serde_json::from_value(value)
            .with_context(|| format!("invalid prettier configuration for {path}"))?;
        Ok(Some(options))
    }

    async fn format(&self, content: &str, options: &FormatOptions) -> anyhow::Result<String> {
        let value = self
            .call(&BridgeRequest::Format {
                module: &self.module,
                content,
                options,
            })
            .await?;
        match value {
            Value::String(formatted) => Ok(formatted),
            other => Err(anyhow!("prettier returned {other} instead of text")),
        }
    }
}
