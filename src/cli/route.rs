//! CLI route: run context and command dispatch.

use crate::catalog::FeatureCatalog;
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_catalog_json, format_catalog_text, format_check_result};
use crate::config::{ConfigLoader, FeaturesConfig};
use crate::error::CatalogError;
use crate::hooks::{EditingContext, EditorSettings, SettingsHooks, BLOCK_EDITOR_SETTINGS};
use crate::labels::{LabelLookup, SourceLabels, TranslationTable};
use crate::provider::{is_feature_enabled, FeatureCatalogProvider, Registrar};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: configuration, host hooks and the
/// registered provider.
pub struct RunContext {
    config: FeaturesConfig,
    hooks: SettingsHooks,
    provider: Arc<FeatureCatalogProvider>,
}

impl RunContext {
    /// Load configuration, install labels and register the provider.
    pub fn new(
        config_path: Option<PathBuf>,
        labels_path: Option<PathBuf>,
    ) -> Result<Self, CatalogError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Self::with_config(config, labels_path.as_deref())
    }

    pub fn with_config(
        config: FeaturesConfig,
        labels_path: Option<&Path>,
    ) -> Result<Self, CatalogError> {
        let labels: Arc<dyn LabelLookup> = match labels_path {
            Some(path) => {
                let table = TranslationTable::load(path)?;
                debug!(path = %path.display(), strings = table.len(), "Translations loaded");
                Arc::new(table)
            }
            None => Arc::new(SourceLabels),
        };

        let hooks = SettingsHooks::new();
        let registrar = Registrar::new();
        let provider = registrar.register(&hooks, labels, config.provider.clone())?;

        Ok(Self {
            config,
            hooks,
            provider,
        })
    }

    pub fn config(&self) -> &FeaturesConfig {
        &self.config
    }

    /// One settings-assembly pass through every registered contributor
    pub fn assemble(&self, settings: EditorSettings, context: &EditingContext) -> EditorSettings {
        self.hooks.apply(BLOCK_EDITOR_SETTINGS, settings, context)
    }

    pub fn execute(&self, command: &Commands) -> Result<String, CatalogError> {
        match command {
            Commands::Catalog { format } => {
                let catalog = self.provider.catalog()?;
                render_catalog(&catalog, format)
            }
            Commands::Assemble {
                settings,
                post_id,
                post_type,
            } => {
                let context = EditingContext {
                    post_id: *post_id,
                    post_type: post_type.clone(),
                };
                let input = read_settings(settings.as_deref())?;
                let keys_before = input.len();
                let output = self.assemble(input, &context);
                info!(keys_before, keys_after = output.len(), "Settings assembled");
                Ok(serde_json::to_string_pretty(&Value::Object(output))?)
            }
            Commands::Check {
                category,
                feature,
                settings,
            } => {
                let input = read_settings(settings.as_deref())?;
                let output = self.assemble(input, &EditingContext::default());
                let enabled = is_feature_enabled(
                    &output,
                    &self.config.provider.config_key,
                    category,
                    feature,
                );
                Ok(format_check_result(category, feature, enabled))
            }
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| CatalogError::ConfigError(format!("Failed to render config: {}", e))),
        }
    }
}

fn render_catalog(catalog: &FeatureCatalog, format: &str) -> Result<String, CatalogError> {
    match format {
        "json" => format_catalog_json(catalog),
        "text" => Ok(format_catalog_text(catalog)),
        other => Err(CatalogError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// Read a settings object from `path`, or start from an empty one
fn read_settings(path: Option<&Path>) -> Result<EditorSettings, CatalogError> {
    let Some(path) = path else {
        return Ok(EditorSettings::new());
    };
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        other => Err(CatalogError::InvalidSettings(format!(
            "{} holds a JSON {}, expected an object",
            path.display(),
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
