//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants::{self, ENV_ENGINE_CONFIG, ENV_INPUT_PATH, ENV_PRETTY_OUTPUT};

/// Application configuration for the `shield-decide` binary
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// JSON snapshot to evaluate; built-in sample when unset
    pub input_path: Option<PathBuf>,

    /// JSON `EngineConfig`; defaults when unset
    pub engine_config_path: Option<PathBuf>,

    /// Pretty-print the decision JSON
    pub pretty_output: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (env, map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            input_path: lookup(ENV_INPUT_PATH)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),

            engine_config_path: lookup(ENV_ENGINE_CONFIG)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),

            pretty_output: lookup(ENV_PRETTY_OUTPUT)
                .map(|s| constants::parse_flag(&s))
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert!(config.input_path.is_none());
        assert!(config.engine_config_path.is_none());
        assert!(config.pretty_output);
    }

    #[test]
    fn test_reads_paths_and_flags() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_INPUT_PATH, "/tmp/snapshot.json"),
            (ENV_ENGINE_CONFIG, "  "),
            (ENV_PRETTY_OUTPUT, "false"),
        ]));
        assert_eq!(config.input_path, Some(PathBuf::from("/tmp/snapshot.json")));
        // Blank value = unset
        assert!(config.engine_config_path.is_none());
        assert!(!config.pretty_output);
    }
}
