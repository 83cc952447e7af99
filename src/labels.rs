//! Label lookup: resolves human-readable strings for catalog entries.
//!
//! The host's localization subsystem sits behind [`LabelLookup`]. Labels are
//! requested once per entry each time a catalog is built; nothing is cached.

use crate::error::LabelError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Resolves a source string in a text domain to its display form.
pub trait LabelLookup: Send + Sync {
    fn translate(&self, text: &str, domain: &str) -> Result<String, LabelError>;
}

impl<F> LabelLookup for F
where
    F: Fn(&str, &str) -> Result<String, LabelError> + Send + Sync,
{
    fn translate(&self, text: &str, domain: &str) -> Result<String, LabelError> {
        self(text, domain)
    }
}

/// Returns source strings unchanged (no localization installed).
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLabels;

impl LabelLookup for SourceLabels {
    fn translate(&self, text: &str, _domain: &str) -> Result<String, LabelError> {
        Ok(text.to_string())
    }
}

/// Per-domain message table.
///
/// File shape: `{ "<domain>": { "<source text>": "<translation>" } }`.
/// Strings with no entry resolve to their source text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    domains: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON file
    pub fn load(path: &Path) -> Result<Self, LabelError> {
        let content = std::fs::read_to_string(path).map_err(|source| LabelError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, LabelError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.domains
            .entry(domain.into())
            .or_default()
            .insert(text.into(), translation.into());
    }

    /// Number of translated strings across all domains
    pub fn len(&self) -> usize {
        self.domains.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LabelLookup for TranslationTable {
    fn translate(&self, text: &str, domain: &str) -> Result<String, LabelError> {
        let translated = self
            .domains
            .get(domain)
            .and_then(|messages| messages.get(text))
            .filter(|t| !t.is_empty());
        Ok(translated.cloned().unwrap_or_else(|| text.to_string()))
    }
}

/// What to do when the collaborator cannot produce a label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Lookup failure is a fatal dependency failure
    #[default]
    Strict,
    /// Substitute the raw entry key
    FallbackToKey,
}

impl std::str::FromStr for LabelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(LabelPolicy::Strict),
            "fallback_to_key" | "fallback-to-key" => Ok(LabelPolicy::FallbackToKey),
            other => Err(format!(
                "Invalid label policy: {} (must be 'strict' or 'fallback_to_key')",
                other
            )),
        }
    }
}

/// Resolve one label under `policy`.
///
/// `key` is the catalog key the label belongs to; it stands in for the label
/// under [`LabelPolicy::FallbackToKey`].
pub fn resolve(
    labels: &dyn LabelLookup,
    text: &str,
    key: &str,
    domain: &str,
    policy: LabelPolicy,
) -> Result<String, LabelError> {
    match labels.translate(text, domain) {
        Ok(label) => Ok(label),
        Err(e) => match policy {
            LabelPolicy::Strict => Err(e),
            LabelPolicy::FallbackToKey => {
                warn!(key, domain, error = %e, "Label lookup failed; using key");
                Ok(key.to_string())
            }
        },
    }
}
