//! Error types for the EditorsKit feature catalog provider.

use thiserror::Error;

/// Settings-assembly extension point errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HookError {
    #[error("Unknown hook: {0}")]
    UnknownHook(String),

    #[error("Invalid accepted argument count for '{name}': {accepted_args} (must be 1 or 2)")]
    InvalidArity { name: String, accepted_args: usize },
}

/// Label-lookup collaborator errors
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("No label available for '{text}' in domain '{domain}'")]
    Missing { text: String, domain: String },

    #[error("Failed to load translations from {path}: {source}")]
    Load {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translations: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Startup and CLI errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Settings extension point unavailable: {0}")]
    MissingExtensionPoint(#[from] HookError),

    #[error("Label lookup failed: {0}")]
    LabelLookup(#[from] LabelError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CatalogError {
    fn from(err: config::ConfigError) -> Self {
        CatalogError::ConfigError(err.to_string())
    }
}
