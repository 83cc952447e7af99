//! Config file source: an explicit path, or $XDG_CONFIG_HOME/editorskit/features.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the user-level config file, if a config home can be found.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("editorskit").join("features.toml"))
}

/// Add the user-level config file to the builder if it exists.
pub fn add_default_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match default_config_path() {
        Some(path) if path.exists() => add_to_builder(builder, &path),
        Some(path) => {
            debug!(config_path = %path.display(), "No user config file; using defaults");
            Ok(builder)
        }
        None => Ok(builder),
    }
}

/// Add an explicit config file. A missing file is an error.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Message(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    Ok(builder.add_source(File::from(path).required(true)))
}
