//! Feature catalog provider.
//!
//! [`FeatureCatalogProvider`] contributes the default feature catalog to the
//! editor settings. [`Registrar`] owns the one provider instance a process
//! subscribes and makes repeated registration a no-op.

use crate::catalog::FeatureCatalog;
use crate::config::ProviderConfig;
use crate::error::{CatalogError, HookError};
use crate::hooks::{EditingContext, EditorSettings, SettingsHooks, BLOCK_EDITOR_SETTINGS};
use crate::labels::LabelLookup;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Name the provider's filter is subscribed under
pub const FILTER_NAME: &str = "editorskit_features_manager";

/// Supplies the default feature catalog during settings assembly
pub struct FeatureCatalogProvider {
    labels: Arc<dyn LabelLookup>,
    config: ProviderConfig,
}

impl FeatureCatalogProvider {
    pub fn new(labels: Arc<dyn LabelLookup>, config: ProviderConfig) -> Self {
        Self { labels, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Build a fresh catalog with every label resolved
    pub fn catalog(&self) -> Result<FeatureCatalog, CatalogError> {
        Ok(FeatureCatalog::build(
            self.labels.as_ref(),
            &self.config.text_domain,
            self.config.label_policy,
        )?)
    }

    /// Inject the catalog under the configured key unless the key is set.
    ///
    /// The check is shallow: any non-null value under the key is left exactly
    /// as it is and nothing inside it is merged. A `null` value counts as unset.
    ///
    /// # Panics
    ///
    /// Under [`LabelPolicy::Strict`](crate::labels::LabelPolicy::Strict), if
    /// the label lookup fails. Registration probes the lookup first, so this
    /// only happens when a collaborator that worked at startup breaks later.
    pub fn on_assemble_settings(
        &self,
        mut settings: EditorSettings,
        _context: Option<&EditingContext>,
    ) -> EditorSettings {
        let key = self.config.config_key.as_str();
        if settings.get(key).is_some_and(|v| !v.is_null()) {
            debug!(key, "Feature catalog already present; leaving settings unchanged");
            return settings;
        }

        let catalog = match self.catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(key, error = %e, "Label lookup failed while assembling editor settings");
                panic!("label lookup failed while assembling editor settings: {}", e)
            }
        };
        debug!(
            key,
            categories = catalog.len(),
            features = catalog.feature_count(),
            "Injecting feature catalog"
        );
        settings.insert(key.to_string(), catalog.to_value());
        settings
    }
}

impl std::fmt::Debug for FeatureCatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureCatalogProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Owns the process's provider instance.
///
/// Create one during application startup and pass it by reference to
/// whatever registers settings contributors.
#[derive(Debug, Default)]
pub struct Registrar {
    instance: Mutex<Option<Arc<FeatureCatalogProvider>>>,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct the provider and subscribe it to `hooks`, once.
    ///
    /// Later calls return the existing instance and subscribe nothing; their
    /// `labels` and `config` are ignored. Fails when the settings hook is not
    /// available or, under the strict label policy, when the label lookup
    /// cannot resolve the catalog.
    pub fn register(
        &self,
        hooks: &SettingsHooks,
        labels: Arc<dyn LabelLookup>,
        config: ProviderConfig,
    ) -> Result<Arc<FeatureCatalogProvider>, CatalogError> {
        let mut slot = self.instance.lock();
        if let Some(existing) = slot.as_ref() {
            debug!("Feature catalog provider already registered");
            return Ok(Arc::clone(existing));
        }

        config.validate().map_err(CatalogError::ConfigError)?;
        if !hooks.is_declared(BLOCK_EDITOR_SETTINGS) {
            return Err(HookError::UnknownHook(BLOCK_EDITOR_SETTINGS.to_string()).into());
        }

        let provider = Arc::new(FeatureCatalogProvider::new(labels, config));
        // Probe the label lookup so a broken collaborator fails startup
        provider.catalog()?;

        let handler = Arc::clone(&provider);
        hooks.add_filter(
            BLOCK_EDITOR_SETTINGS,
            FILTER_NAME,
            provider.config.priority,
            provider.config.accepted_args,
            move |settings, context| handler.on_assemble_settings(settings, context),
        )?;

        info!(
            hook = BLOCK_EDITOR_SETTINGS,
            priority = provider.config.priority,
            key = %provider.config.config_key,
            "Feature catalog provider registered"
        );
        *slot = Some(Arc::clone(&provider));
        Ok(provider)
    }

    pub fn is_registered(&self) -> bool {
        self.instance.lock().is_some()
    }

    pub fn instance(&self) -> Option<Arc<FeatureCatalogProvider>> {
        self.instance.lock().clone()
    }
}

/// Read `settings[key][category]["items"][feature]["value"]`.
///
/// `None` when any step of the path is missing or the flag is not a boolean.
pub fn is_feature_enabled(
    settings: &EditorSettings,
    key: &str,
    category: &str,
    feature: &str,
) -> Option<bool> {
    settings
        .get(key)?
        .get(category)?
        .get("items")?
        .get(feature)?
        .get("value")
        .and_then(Value::as_bool)
}
