use std::time::Duration;

use anyhow::Context;

pub const NODE_ENV: &str = "PRETTIER_DIFFCHECK_NODE";
pub const PRETTIER_MODULE_ENV: &str = "PRETTIER_DIFFCHECK_PRETTIER";
pub const TIMEOUT_ENV: &str = "PRETTIER_DIFFCHECK_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub node_bin: String,
    pub prettier_module: String,
    pub format_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_bin: "node".to_string(),
            prettier_module: "prettier".to_string(),
            format_timeout: None,
        }
    }
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let format_timeout = match non_empty(TIMEOUT_ENV) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds"))?;
                anyhow::ensure!(secs > 0, "{TIMEOUT_ENV} must be greater than zero");
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            node_bin: non_empty(NODE_ENV).unwrap_or(defaults.node_bin),
            prettier_module: non_empty(PRETTIER_MODULE_ENV).unwrap_or(defaults.prettier_module),
            format_timeout,
        })
    }
}
