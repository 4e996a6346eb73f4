//! User configuration loaded from `config.toml`.
//!
//! Looked up at `$XDG_CONFIG_HOME/zcalc/config.toml` (or the platform
//! equivalent) unless a path is given explicitly. A missing file means
//! defaults. `ZCALC_HISTORY_LIMIT` and `ZCALC_LOG` override the file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::engine::DEFAULT_HISTORY_LIMIT;
use crate::ui::Keypad;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Undo steps kept by the interactive session.
    pub history_limit: usize,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
    /// Extra keypad words, e.g. `ans = "="`.
    pub aliases: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_filter: None,
            aliases: HashMap::new(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// An explicit path must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse config text.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("ZCALC_HISTORY_LIMIT") {
            match v.parse() {
                Ok(limit) => self.history_limit = limit,
                Err(_) => tracing::warn!(value = %v, "ignoring invalid ZCALC_HISTORY_LIMIT"),
            }
        }
        if let Ok(v) = std::env::var("ZCALC_LOG") {
            self.log_filter = Some(v);
        }
    }

    /// Build the keypad with this config's aliases.
    pub fn keypad(&self) -> anyhow::Result<Keypad> {
        Keypad::with_aliases(&self.aliases).context("Invalid [aliases] in config")
    }
}
