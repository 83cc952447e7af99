//! Settings-assembly extension point.
//!
//! Contributors subscribe to a named hook with a priority; [`SettingsHooks::apply`]
//! threads the settings object through every contributor in ascending priority
//! order, ties broken by subscription order.

use crate::error::HookError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Hook the editor settings are assembled through
pub const BLOCK_EDITOR_SETTINGS: &str = "block_editor_settings";

/// Priority contributors get when they have no reason to pick another
pub const DEFAULT_PRIORITY: i32 = 10;

/// The settings object handed to the editor UI
pub type EditorSettings = Map<String, Value>;

/// Opaque reference to the document being edited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditingContext {
    pub post_id: Option<u64>,
    pub post_type: Option<String>,
}

impl EditingContext {
    pub fn for_post(post_id: u64, post_type: impl Into<String>) -> Self {
        Self {
            post_id: Some(post_id),
            post_type: Some(post_type.into()),
        }
    }
}

/// Contributor callback. The context is `None` for single-argument contributors.
///
/// A contributor has no error channel: one that cannot produce settings
/// panics, which aborts the whole assembly pass.
pub type SettingsFilter =
    Arc<dyn Fn(EditorSettings, Option<&EditingContext>) -> EditorSettings + Send + Sync>;

#[derive(Clone)]
struct Subscriber {
    name: String,
    priority: i32,
    accepted_args: usize,
    filter: SettingsFilter,
}

/// Registry of settings contributors, keyed by hook name
#[derive(Default)]
pub struct SettingsHooks {
    hooks: RwLock<HashMap<String, Vec<Subscriber>>>,
}

impl SettingsHooks {
    /// Create a registry with [`BLOCK_EDITOR_SETTINGS`] declared
    pub fn new() -> Self {
        let hooks = Self::default();
        hooks.declare(BLOCK_EDITOR_SETTINGS);
        hooks
    }

    /// Declare a hook contributors may subscribe to
    pub fn declare(&self, hook: &str) {
        self.hooks.write().entry(hook.to_string()).or_default();
    }

    pub fn is_declared(&self, hook: &str) -> bool {
        self.hooks.read().contains_key(hook)
    }

    /// Subscribe `filter` to `hook`.
    ///
    /// `accepted_args` follows the host contract: 1 passes only the settings,
    /// 2 also passes the editing context.
    pub fn add_filter<F>(
        &self,
        hook: &str,
        name: impl Into<String>,
        priority: i32,
        accepted_args: usize,
        filter: F,
    ) -> Result<(), HookError>
    where
        F: Fn(EditorSettings, Option<&EditingContext>) -> EditorSettings + Send + Sync + 'static,
    {
        let name = name.into();
        if !(1..=2).contains(&accepted_args) {
            return Err(HookError::InvalidArity {
                name,
                accepted_args,
            });
        }

        let mut hooks = self.hooks.write();
        let subscribers = hooks
            .get_mut(hook)
            .ok_or_else(|| HookError::UnknownHook(hook.to_string()))?;

        debug!(hook, filter = %name, priority, accepted_args, "Settings filter added");
        // Stable position: after every subscriber with priority <= ours
        let at = subscribers.partition_point(|s| s.priority <= priority);
        subscribers.insert(
            at,
            Subscriber {
                name,
                priority,
                accepted_args,
                filter: Arc::new(filter),
            },
        );
        Ok(())
    }

    /// Run `settings` through every contributor of `hook`.
    ///
    /// An undeclared hook has no contributors and returns `settings` as is.
    pub fn apply(
        &self,
        hook: &str,
        settings: EditorSettings,
        context: &EditingContext,
    ) -> EditorSettings {
        // Snapshot so contributors may subscribe further filters while running
        let subscribers = self.hooks.read().get(hook).cloned().unwrap_or_default();

        subscribers.iter().fold(settings, |settings, subscriber| {
            trace!(hook, filter = %subscriber.name, priority = subscriber.priority, "Applying settings filter");
            let context = (subscriber.accepted_args >= 2).then_some(context);
            (subscriber.filter)(settings, context)
        })
    }

    pub fn subscriber_count(&self, hook: &str) -> usize {
        self.hooks.read().get(hook).map(Vec::len).unwrap_or(0)
    }

    pub fn has_filter(&self, hook: &str, name: &str) -> bool {
        self.hooks
            .read()
            .get(hook)
            .map(|subs| subs.iter().any(|s| s.name == name))
            .unwrap_or(false)
    }

    /// Contributor names of `hook` in the order they run
    pub fn filter_names(&self, hook: &str) -> Vec<String> {
        self.hooks
            .read()
            .get(hook)
            .map(|subs| subs.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for SettingsHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hooks = self.hooks.read();
        let mut map = f.debug_map();
        for (hook, subs) in hooks.iter() {
            let names: Vec<&str> = subs.iter().map(|s| s.name.as_str()).collect();
            map.entry(hook, &names);
        }
        map.finish()
    }
}
