//! CLI output: maps library errors to user-facing messages.

use crate::error::{CatalogError, HookError};

pub fn map_error(err: &CatalogError) -> String {
    match err {
        CatalogError::MissingExtensionPoint(HookError::UnknownHook(hook)) => format!(
            "Error: the editor does not expose the '{}' settings hook",
            hook
        ),
        CatalogError::LabelLookup(e) => format!(
            "Error: labels could not be resolved ({}). Set provider.label_policy = \"fallback_to_key\" to use raw keys.",
            e
        ),
        CatalogError::InvalidSettings(msg) => format!("Error: invalid settings file: {}", msg),
        other => format!("Error: {}", other),
    }
}
