//! Configuration System
//!
//! Layered configuration for the feature catalog provider: built-in defaults,
//! an optional TOML file and `EDITORSKIT_*` environment overrides, merged with
//! the `config` crate.

use crate::error::CatalogError;
use crate::labels::LabelPolicy;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

pub use sources::config_file::default_config_path;
pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Catalog provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the provider subscribes and what it writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Settings key the catalog is injected under
    #[serde(default = "default_config_key")]
    pub config_key: String,

    /// Text domain passed to the label lookup
    #[serde(default = "default_text_domain")]
    pub text_domain: String,

    /// Priority among settings contributors (lower runs earlier)
    #[serde(default = "default_priority")]
    pub priority: i32,

    /// Arguments the provider's filter accepts (1 or 2)
    #[serde(default = "default_accepted_args")]
    pub accepted_args: usize,

    /// Failure policy for label lookups
    #[serde(default)]
    pub label_policy: LabelPolicy,
}

fn default_config_key() -> String {
    crate::catalog::CONFIG_KEY.to_string()
}

fn default_text_domain() -> String {
    crate::catalog::TEXT_DOMAIN.to_string()
}

fn default_priority() -> i32 {
    crate::hooks::DEFAULT_PRIORITY
}

fn default_accepted_args() -> usize {
    2
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            config_key: default_config_key(),
            text_domain: default_text_domain(),
            priority: default_priority(),
            accepted_args: default_accepted_args(),
            label_policy: LabelPolicy::default(),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.config_key.trim().is_empty() {
            return Err("config_key cannot be empty".to_string());
        }
        if self.text_domain.trim().is_empty() {
            return Err("text_domain cannot be empty".to_string());
        }
        if !(1..=2).contains(&self.accepted_args) {
            return Err(format!(
                "accepted_args must be 1 or 2, got {}",
                self.accepted_args
            ));
        }
        Ok(())
    }
}

impl FeaturesConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.provider
            .validate()
            .map_err(|e| CatalogError::ConfigError(format!("provider: {}", e)))
    }
}

/// Loads [`FeaturesConfig`] from its sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the user config file if present, then the environment
    pub fn load() -> Result<FeaturesConfig, CatalogError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::config_file::add_default_to_builder(builder)?;
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Defaults, then `path`, then the environment. `path` must exist.
    pub fn load_from_file(path: &Path) -> Result<FeaturesConfig, CatalogError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::config_file::add_to_builder(builder, path)?;
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Defaults plus `path` only, ignoring the environment
    pub fn load_file_only(path: &Path) -> Result<FeaturesConfig, CatalogError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::config_file::add_to_builder(builder, path)?;
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<FeaturesConfig, CatalogError> {
        let config: FeaturesConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
