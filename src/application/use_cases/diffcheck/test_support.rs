use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::dto::options::FormatOptions;
use crate::application::ports::format_engine::FormatEngine;

/// Stand-in for Prettier: spaces out `= { } : ,`, ensures a final newline and
/// rejects unbalanced braces. Like Prettier it cannot infer a parser for a
/// path without an extension.
#[derive(Default)]
pub struct FakeEngine {
    pub delays: HashMap<String, Duration>,
    pub panics_on: Option<String>,
}

impl FakeEngine {
    pub fn with_delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    pub fn panicking_on(mut self, path: &str) -> Self {
        self.panics_on = Some(path.to_string());
        self
    }
}

#[async_trait]
impl FormatEngine for FakeEngine {
    async fn resolve_config(&self, _path: &str) -> anyhow::Result<Option<FormatOptions>> {
        Ok(None)
    }

    async fn format(&self, content: &str, options: &FormatOptions) -> anyhow::Result<String> {
        let path = options.filepath.clone().unwrap_or_default();
        if let Some(delay) = self.delays.get(&path) {
            tokio::time::sleep(*delay).await;
        }
        if self.panics_on.as_deref() == Some(path.as_str()) {
            panic!("engine crashed on {path}");
        }
        if options.parser.is_none() && Path::new(&path).extension().is_none() {
            anyhow::bail!("No parser could be inferred for file \"{path}\".");
        }
        if content.matches('{').count() != content.matches('}').count() {
            anyhow::bail!("SyntaxError: Unexpected token");
        }
        let mut out = content
            .lines()
            .map(pretty_line)
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        Ok(out)
    }
}

fn pretty_line(line: &str) -> String {
    let mut out = String::new();
    let mut chars = line.trim().chars().peekable();
    while let Some(c) = chars.next() {
        if !matches!(c, '=' | '{' | '}' | ':' | ',') {
            out.push(c);
            continue;
        }
        while out.ends_with(' ') {
            out.pop();
        }
        match c {
            '=' => out.push_str(" = "),
            '{' => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str("{ ");
            }
            '}' => out.push_str(" }"),
            ':' => out.push_str(": "),
            _ => out.push_str(", "),
        }
        while chars.peek() == Some(&' ') {
            chars.next();
        }
    }
    out
}

#[test]
fn fake_engine_output_is_stable() {
    assert_eq!(pretty_line("const foo={a:1,b:2};"), "const foo = { a: 1, b: 2 };");
    assert_eq!(
        pretty_line("const foo = { a: 1, b: 2 };"),
        "const foo = { a: 1, b: 2 };"
    );
}
