//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources win key by key: defaults, then the config file, then the
//! environment.

use crate::catalog::{CONFIG_KEY, TEXT_DOMAIN};
use crate::hooks::DEFAULT_PRIORITY;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("provider.config_key", CONFIG_KEY)?
        .set_default("provider.text_domain", TEXT_DOMAIN)?
        .set_default("provider.priority", i64::from(DEFAULT_PRIORITY))?
        .set_default("provider.accepted_args", 2_i64)?
        .set_default("provider.label_policy", "strict")
}
