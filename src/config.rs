//! Runtime configuration read from `TASKFLOW_*` environment variables.

use std::path::PathBuf;

use crate::store::DEFAULT_KEY;

/// Storage directory used when neither `--store` nor `TASKFLOW_STORE` is set.
pub const DEFAULT_STORE_DIR: &str = ".taskflow";

/// Settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory of the file-backed storage.
    pub store_dir: PathBuf,
    /// Storage key of the task snapshot.
    pub key: String,
    /// When set, port interactions are recorded under this directory.
    pub record_dir: Option<PathBuf>,
    /// When set, file logging is enabled in this directory.
    pub log_dir: Option<String>,
    /// Level spec for the file logger.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            key: DEFAULT_KEY.to_string(),
            record_dir: None,
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            store_dir: get("TASKFLOW_STORE").map_or(defaults.store_dir, PathBuf::from),
            key: get("TASKFLOW_KEY").unwrap_or(defaults.key),
            record_dir: get("TASKFLOW_RECORD").map(PathBuf::from),
            log_dir: get("TASKFLOW_LOG_DIR"),
            log_level: get("TASKFLOW_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Applies the `--store` flag, which wins over the environment.
    #[must_use]
    pub fn with_store_override(mut self, store: Option<PathBuf>) -> Self {
        if let Some(dir) = store {
            self.store_dir = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("TASKFLOW_STORE", "/data/tasks"),
            ("TASKFLOW_KEY", "work"),
            ("TASKFLOW_RECORD", "/tmp/cassettes"),
            ("TASKFLOW_LOG_DIR", "/var/log/taskflow"),
            ("TASKFLOW_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.store_dir, PathBuf::from("/data/tasks"));
        assert_eq!(config.key, "work");
        assert_eq!(config.record_dir, Some(PathBuf::from("/tmp/cassettes")));
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/taskflow"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[("TASKFLOW_KEY", "  ")]));
        assert_eq!(config.key, DEFAULT_KEY);
    }

    #[test]
    fn store_flag_overrides_environment() {
        let config = Config::from_lookup(lookup(&[("TASKFLOW_STORE", "/env")]))
            .with_store_override(Some(PathBuf::from("/flag")));
        assert_eq!(config.store_dir, PathBuf::from("/flag"));
    }
}
