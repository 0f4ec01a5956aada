use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options forwarded to the formatting engine.
///
/// Only the keys this tool acts on are typed; everything else (`semi`,
/// `tabWidth`, plugin options, ...) rides along in `extra` and is passed to
/// Prettier verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(default, skip_serializing)]
    pub diff_check: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormatOptions {
    pub fn diff_check() -> Self {
        Self {
            diff_check: true,
            ..Self::default()
        }
    }

    pub fn with_parser(mut self, parser: impl Into<String>) -> Self {
        self.parser = Some(parser.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Layers `self` on top of `base`: every value set here wins, anything
    /// left unset falls back to `base`.
    pub fn merged_over(&self, base: &FormatOptions) -> FormatOptions {
        let mut extra = base.extra.clone();
        for (key, value) in &self.extra {
            extra.insert(key.clone(), value.clone());
        }
        FormatOptions {
            diff_check: self.diff_check,
            parser: self.parser.clone().or_else(|| base.parser.clone()),
            filepath: self.filepath.clone().or_else(|| base.filepath.clone()),
            extra,
        }
    }
}
