//! EditorsKit Features: feature catalog provider for block editor settings
//!
//! Contributes a fixed catalog of optional editor features (grouped into
//! categories, each with an identifier, a label and an enabled flag) to the
//! settings object the host assembles for the block editor. The catalog is
//! injected only when no other contributor has already set it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod labels;
pub mod logging;
pub mod provider;

pub use catalog::{FeatureCatalog, FeatureCategory, FeatureDescriptor, CONFIG_KEY, TEXT_DOMAIN};
pub use error::CatalogError;
pub use hooks::{EditingContext, EditorSettings, SettingsHooks};
pub use provider::{is_feature_enabled, FeatureCatalogProvider, Registrar};
