//! Layered application configuration.
//!
//! Settings are merged with figment, later layers winning:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config <PATH>` or the platform config directory)
//! 3. `INTDUPE_*` environment variables (`INTDUPE_OUTPUT=json`)
//! 4. CLI flags, applied by [`Config::apply_run_args`]
//!
//! ```toml
//! strategies = ["quicksort", "hashset"]
//! output = "json"
//! timing = false
//! color = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::{OutputFormat, RunArgs};
use crate::dedup::Strategy;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "INTDUPE_";

const KNOWN_KEYS: [&str; 4] = ["strategies", "output", "timing", "color"];

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer holds a value of the wrong shape (unknown strategy, bad bool...).
    #[error("Invalid configuration: {0}")]
    Extract(#[from] figment::Error),

    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strategies to run, in order. Empty means all.
    pub strategies: Vec<Strategy>,
    /// Output format for run results.
    pub output: OutputFormat,
    /// Include elapsed times in the output.
    pub timing: bool,
    /// Color text output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            output: OutputFormat::Text,
            timing: true,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when any layer is invalid.
    ///
    /// `path` overrides the platform config file location.
    pub fn load(path: Option<&Path>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using default configuration", e);
                Self::default()
            }
        }
    }

    /// Load configuration from defaults, the config file and the environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or any layer holds
    /// an invalid value.
    pub fn try_load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path.filter(|p| p.exists()) {
            let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            for (key, suggestion) in unknown_keys(&content) {
                match suggestion {
                    Some(s) => log::warn!(
                        "Unknown config key '{}' in {} (did you mean '{}'?)",
                        key,
                        path.display(),
                        s
                    ),
                    None => log::warn!("Unknown config key '{}' in {}", key, path.display()),
                }
            }
            log::debug!("Loading config from {}", path.display());
            figment = figment.merge(Toml::string(&content));
        }

        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }

    /// Default platform-specific configuration path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "intdupe", "intdupe")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Apply CLI flags on top of the loaded layers.
    pub fn apply_run_args(&mut self, args: &RunArgs, no_color: bool) {
        if !args.strategies.is_empty() {
            self.strategies = args.strategies.clone();
        }
        if let Some(output) = args.output {
            self.output = output;
        }
        if args.no_timing {
            self.timing = false;
        }
        if no_color {
            self.color = false;
        }
    }

    /// Strategies to run, with an empty list meaning all of them.
    #[must_use]
    pub fn effective_strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }
}

/// Top-level keys of a TOML document that the configuration does not know,
/// each with the closest known key if one is similar enough.
///
/// Unparseable documents yield nothing; figment reports those itself.
#[must_use]
pub fn unknown_keys(content: &str) -> Vec<(String, Option<&'static str>)> {
    let Ok(table) = content.parse::<toml::Table>() else {
        return Vec::new();
    };
    table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|key| {
            let suggestion = KNOWN_KEYS
                .iter()
                .map(|known| (*known, strsim::jaro_winkler(key, known)))
                .filter(|(_, score)| *score > 0.8)
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(known, _)| known);
            (key.clone(), suggestion)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.strategies, Strategy::ALL.to_vec());
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.timing);
        assert!(config.color);
    }

    #[test]
    fn test_unknown_keys_with_suggestion() {
        let found = unknown_keys("strategy = [\"linear\"]\noutput = \"json\"\nfoo = 1\n");
        assert_eq!(found.len(), 2);
        assert!(found.contains(&("strategy".to_string(), Some("strategies"))));
        assert!(found.contains(&("foo".to_string(), None)));
    }

    #[test]
    fn test_unknown_keys_invalid_toml() {
        assert!(unknown_keys("this is = = not toml").is_empty());
    }

    #[test]
    fn test_effective_strategies_empty_means_all() {
        let config = Config {
            strategies: Vec::new(),
            ..Config::default()
        };
        assert_eq!(config.effective_strategies(), Strategy::ALL.to_vec());
    }
}
