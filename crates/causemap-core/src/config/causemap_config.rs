//! Top-level causemap configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, Clustering, ValidationConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "causemap.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CAUSEMAP_*`)
/// 3. Project config (`causemap.toml` in project root)
/// 4. User config (`~/.causemap/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CausemapConfig {
    pub analysis: AnalysisConfig,
    pub validation: ValidationConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub clustering: Option<Clustering>,
    pub driver_limit: Option<usize>,
    pub outcome_limit: Option<usize>,
    pub loop_limit: Option<usize>,
    pub strict_strength: Option<bool>,
}

impl CausemapConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a parse failure is fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CausemapConfig) -> Result<(), ConfigError> {
        let limits = [
            ("analysis.driver_limit", config.analysis.driver_limit),
            ("analysis.outcome_limit", config.analysis.outcome_limit),
            ("analysis.loop_limit", config.analysis.loop_limit),
            ("analysis.potency_min_heads", config.analysis.potency_min_heads),
        ];
        for (field, value) in limits {
            if value == Some(0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.causemap/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".causemap").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut CausemapConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CausemapConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut CausemapConfig, other: &CausemapConfig) {
        let a = &other.analysis;
        if a.clustering.is_some() {
            base.analysis.clustering = a.clustering;
        }
        if a.driver_limit.is_some() {
            base.analysis.driver_limit = a.driver_limit;
        }
        if a.outcome_limit.is_some() {
            base.analysis.outcome_limit = a.outcome_limit;
        }
        if a.loop_limit.is_some() {
            base.analysis.loop_limit = a.loop_limit;
        }
        if a.potency_min_heads.is_some() {
            base.analysis.potency_min_heads = a.potency_min_heads;
        }

        let v = &other.validation;
        if v.strict_strength.is_some() {
            base.validation.strict_strength = v.strict_strength;
        }
        if v.allow_dangling.is_some() {
            base.validation.allow_dangling = v.allow_dangling;
        }
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut CausemapConfig) {
        if let Some(v) = env_parse::<Clustering>("CAUSEMAP_CLUSTERING") {
            config.analysis.clustering = Some(v);
        }
        if let Some(v) = env_parse::<usize>("CAUSEMAP_DRIVER_LIMIT") {
            config.analysis.driver_limit = Some(v);
        }
        if let Some(v) = env_parse::<usize>("CAUSEMAP_OUTCOME_LIMIT") {
            config.analysis.outcome_limit = Some(v);
        }
        if let Some(v) = env_parse::<usize>("CAUSEMAP_LOOP_LIMIT") {
            config.analysis.loop_limit = Some(v);
        }
        if let Some(v) = env_parse::<usize>("CAUSEMAP_POTENCY_MIN_HEADS") {
            config.analysis.potency_min_heads = Some(v);
        }
        if let Some(v) = env_parse::<bool>("CAUSEMAP_STRICT_STRENGTH") {
            config.validation.strict_strength = Some(v);
        }
        if let Some(v) = env_parse::<bool>("CAUSEMAP_ALLOW_DANGLING") {
            config.validation.allow_dangling = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut CausemapConfig, cli: &CliOverrides) {
        if cli.clustering.is_some() {
            config.analysis.clustering = cli.clustering;
        }
        if cli.driver_limit.is_some() {
            config.analysis.driver_limit = cli.driver_limit;
        }
        if cli.outcome_limit.is_some() {
            config.analysis.outcome_limit = cli.outcome_limit;
        }
        if cli.loop_limit.is_some() {
            config.analysis.loop_limit = cli.loop_limit;
        }
        if cli.strict_strength.is_some() {
            config.validation.strict_strength = cli.strict_strength;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.trim().parse().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
