//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{ArrError, Result};

/// Initial backing-buffer capacity of a fresh array.
pub const DEFAULT_INITIAL_CAPACITY: usize = 2;

/// Cap on the number of elements the populate action may reach.
pub const DEFAULT_MAX_ELEMENTS: usize = 100;

/// Full array console configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub array: ArrayConfig,
    pub console: ConsoleConfig,
}

/// Sizing of the session's dynamic array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArrayConfig {
    pub initial_capacity: usize,
    pub max_elements: usize,
}

/// Presentation knobs for the interactive session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Colorize message tags (still subject to TTY detection).
    pub color: bool,
    /// Print the introduction and conclusion text.
    pub banner: bool,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
        }
    }
}

impl Config {
    /// Default configuration path: `$HOME/.config/arrcon/config.toml`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let home_dir = env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
        home_dir.join(".config").join("arrcon").join("config.toml")
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path; defaults are used.
    /// The result is not validated yet: callers layer CLI flags on top and then
    /// call [`Config::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw =
                fs::read_to_string(&path_buf).map_err(|source| ArrError::io(&path_buf, source))?;
            toml::from_str::<Self>(&raw)?
        } else if is_explicit_path {
            return Err(ArrError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.apply_env_overrides_from(env_var)?;
        Ok(cfg)
    }

    fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("ARRCON_INITIAL_CAPACITY") {
            self.array.initial_capacity = parse_env_usize("ARRCON_INITIAL_CAPACITY", &raw)?;
        }
        if let Some(raw) = lookup("ARRCON_MAX_ELEMENTS") {
            self.array.max_elements = parse_env_usize("ARRCON_MAX_ELEMENTS", &raw)?;
        }
        if let Some(raw) = lookup("ARRCON_COLOR") {
            self.console.color = parse_env_bool("ARRCON_COLOR", &raw)?;
        }
        if let Some(raw) = lookup("ARRCON_BANNER") {
            self.console.banner = parse_env_bool("ARRCON_BANNER", &raw)?;
        }
        Ok(())
    }

    /// Reject settings the session cannot run with.
    ///
    /// An initial capacity above the element cap is allowed; the buffer is
    /// simply never filled.
    pub fn validate(&self) -> Result<()> {
        if self.array.initial_capacity == 0 {
            return Err(ArrError::InvalidConfig {
                details: "array.initial_capacity must be >= 1".to_string(),
            });
        }
        if self.array.max_elements == 0 {
            return Err(ArrError::InvalidConfig {
                details: "array.max_elements must be >= 1".to_string(),
            });
        }
        if i32::try_from(self.array.max_elements).is_err() {
            return Err(ArrError::InvalidConfig {
                details: format!(
                    "array.max_elements must fit a prompt bound, got {}",
                    self.array.max_elements
                ),
            });
        }
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn parse_env_usize(name: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|error| ArrError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    raw.trim()
        .parse::<bool>()
        .map_err(|error| ArrError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use super::{ArrError, Config};
    use std::collections::HashMap;
    use std::path::Path;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.array.initial_capacity, 2);
        assert_eq!(cfg.array.max_elements, 100);
        assert!(cfg.console.color);
        assert!(cfg.console.banner);
    }

    #[test]
    fn zero_initial_capacity_rejected() {
        let mut cfg = Config::default();
        cfg.array.initial_capacity = 0;
        let err = cfg.validate().expect_err("expected capacity error");
        assert!(err.to_string().contains("initial_capacity"));
    }

    #[test]
    fn zero_max_elements_rejected() {
        let mut cfg = Config::default();
        cfg.array.max_elements = 0;
        let err = cfg.validate().expect_err("expected cap error");
        assert!(err.to_string().contains("max_elements"));
    }

    #[test]
    fn capacity_above_cap_is_valid() {
        let mut cfg = Config::default();
        cfg.array.max_elements = 1;
        assert!(cfg.validate().is_ok());
        cfg.array.initial_capacity = 200;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn cap_beyond_i32_rejected() {
        let mut cfg = Config::default();
        cfg.array.max_elements = usize::MAX;
        let err = cfg.validate().expect_err("expected bound error");
        match err {
            ArrError::InvalidConfig { details } => assert!(details.contains("prompt bound")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn env_overrides_apply() {
        let mut cfg = Config::default();
        let overrides = vars(&[
            ("ARRCON_INITIAL_CAPACITY", "8"),
            ("ARRCON_MAX_ELEMENTS", "16"),
            ("ARRCON_COLOR", "false"),
            ("ARRCON_BANNER", "false"),
        ]);

        cfg.apply_env_overrides_from(|name| overrides.get(name).cloned())
            .expect("env overrides should parse");

        assert_eq!(cfg.array.initial_capacity, 8);
        assert_eq!(cfg.array.max_elements, 16);
        assert!(!cfg.console.color);
        assert!(!cfg.console.banner);
    }

    #[test]
    fn env_invalid_number_rejected() {
        let mut cfg = Config::default();
        let overrides = vars(&[("ARRCON_MAX_ELEMENTS", "lots")]);

        let err = cfg
            .apply_env_overrides_from(|name| overrides.get(name).cloned())
            .expect_err("invalid number should fail");
        match err {
            ArrError::ConfigParse { context, details } => {
                assert_eq!(context, "env");
                assert!(details.contains("ARRCON_MAX_ELEMENTS"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn env_invalid_boolean_rejected() {
        let mut cfg = Config::default();
        let overrides = vars(&[("ARRCON_COLOR", "sometimes")]);

        let err = cfg
            .apply_env_overrides_from(|name| overrides.get(name).cloned())
            .expect_err("invalid bool should fail");
        assert_eq!(err.code(), "ARR-1003");
    }

    #[test]
    fn load_returns_error_for_explicit_missing_path() {
        let result = Config::load(Some(Path::new("/nonexistent/arrcon/config.toml")));
        assert!(matches!(result, Err(ArrError::MissingConfig { .. })));
    }

    #[test]
    fn load_reads_partial_toml_with_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[array]\nmax_elements = 10\n").unwrap();

        let cfg = Config::load(Some(&path)).expect("config should load");
        assert_eq!(cfg.array.max_elements, 10);
        assert_eq!(cfg.array.initial_capacity, 2);
        assert!(cfg.console.banner);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[array\nmax_elements = ").unwrap();

        let err = Config::load(Some(&path)).expect_err("malformed toml should fail");
        assert_eq!(err.code(), "ARR-1003");
    }

    #[test]
    fn load_defers_validation_to_caller() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[array]\ninitial_capacity = 0\n").unwrap();

        let mut cfg = Config::load(Some(&path)).expect("load does not validate");
        assert_eq!(cfg.array.initial_capacity, 0);
        assert_eq!(cfg.validate().expect_err("zero capacity").code(), "ARR-1001");

        cfg.array.initial_capacity = 4;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn load_reports_unreadable_file_with_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = Config::load(Some(tmp.path())).expect_err("a directory is not a file");
        assert_eq!(err.code(), "ARR-3002");
        assert!(err.to_string().contains(&tmp.path().display().to_string()));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.console.color = false;
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("[array]"));
        assert!(text.contains("[console]"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }
}
