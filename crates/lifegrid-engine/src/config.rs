//! Configuration loading and typed config structures for the engine.
//!
//! The canonical configuration lives in `lifegrid-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads the file. Every
//! field has a default, so a missing file or a partial file both work.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
///
/// Mirrors the structure of `lifegrid-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Board-level settings (name, seed, dimensions, starting pattern).
    #[serde(default)]
    pub world: WorldConfig,

    /// Run boundary and output settings.
    #[serde(default)]
    pub run: RunConfig,
}

impl EngineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Board-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable run name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducible random boards.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Board width.
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Board height.
    #[serde(default = "default_rows")]
    pub rows: u32,

    /// Starting pattern: `random` or a named pattern from
    /// [`crate::patterns::PATTERNS`].
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            columns: default_columns(),
            rows: default_rows(),
            pattern: default_pattern(),
        }
    }
}

/// Run boundary and output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Maximum generations before the run is declared unstabilized.
    #[serde(default = "default_max_generations")]
    pub max_generations: u64,

    /// Whether to print the board after every generation.
    #[serde(default = "default_render")]
    pub render: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_generations: default_max_generations(),
            render: default_render(),
        }
    }
}

fn default_world_name() -> String {
    String::from("lifegrid")
}

const fn default_seed() -> u64 {
    42
}

const fn default_columns() -> u32 {
    lifegrid_core::DEFAULT_COLUMNS
}

const fn default_rows() -> u32 {
    lifegrid_core::DEFAULT_ROWS
}

fn default_pattern() -> String {
    String::from("random")
}

const fn default_max_generations() -> u64 {
    lifegrid_core::DEFAULT_GENERATION_CAP
}

const fn default_render() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = EngineConfig::parse("{}");
        assert_eq!(config.ok(), Some(EngineConfig::default()));
    }

    #[test]
    fn partial_yaml_fills_missing_fields() {
        let yaml = "world:\n  columns: 20\n  pattern: blinker\n";
        let config = EngineConfig::parse(yaml).ok();
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.world.columns, 20);
            assert_eq!(config.world.rows, lifegrid_core::DEFAULT_ROWS);
            assert_eq!(config.world.pattern, "blinker");
            assert_eq!(
                config.run.max_generations,
                lifegrid_core::DEFAULT_GENERATION_CAP
            );
        }
    }

    #[test]
    fn full_yaml_overrides_everything() {
        let yaml = concat!(
            "world:\n",
            "  name: soup-test\n",
            "  seed: 7\n",
            "  columns: 16\n",
            "  rows: 12\n",
            "  pattern: glider\n",
            "run:\n",
            "  max_generations: 100\n",
            "  render: false\n",
        );
        let config = EngineConfig::parse(yaml).ok();
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.world.name, "soup-test");
            assert_eq!(config.world.seed, 7);
            assert_eq!(config.world.columns, 16);
            assert_eq!(config.world.rows, 12);
            assert_eq!(config.run.max_generations, 100);
            assert!(!config.run.render);
        }
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = EngineConfig::parse("world: [not, a, mapping]");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }
}
