//! Integration tests for registration and the settings merge

use super::test_utils::{assemble, registered_hooks};
use editorskit_features::config::ProviderConfig;
use editorskit_features::hooks::BLOCK_EDITOR_SETTINGS;
use editorskit_features::labels::{LabelPolicy, SourceLabels, TranslationTable};
use editorskit_features::provider::FILTER_NAME;
use editorskit_features::{is_feature_enabled, EditorSettings, Registrar, SettingsHooks};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn test_repeated_registration_subscribes_once() {
    let hooks = SettingsHooks::new();
    let registrar = Registrar::new();
    for _ in 0..10 {
        registrar
            .register(&hooks, Arc::new(SourceLabels), ProviderConfig::default())
            .unwrap();
    }
    assert_eq!(hooks.subscriber_count(BLOCK_EDITOR_SETTINGS), 1);
}

#[test]
fn test_concurrent_registration_subscribes_once() {
    let hooks = Arc::new(SettingsHooks::new());
    let registrar = Arc::new(Registrar::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let hooks = Arc::clone(&hooks);
            let registrar = Arc::clone(&registrar);
            thread::spawn(move || {
                registrar
                    .register(&hooks, Arc::new(SourceLabels), ProviderConfig::default())
                    .unwrap()
            })
        })
        .collect();
    let providers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(hooks.subscriber_count(BLOCK_EDITOR_SETTINGS), 1);
    assert!(providers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}

#[test]
fn test_existing_key_not_overwritten() {
    let hooks = registered_hooks();
    let mut settings = EditorSettings::new();
    settings.insert("editorskit".into(), json!({ "custom": true }));

    let out = assemble(&hooks, settings.clone());
    assert_eq!(out, settings);
}

#[test]
fn test_partial_catalog_not_deep_merged() {
    let hooks = registered_hooks();
    let mut settings = EditorSettings::new();
    settings.insert(
        "editorskit".into(),
        json!({ "writing": { "name": "writing", "items": { "markdown": { "value": false } } } }),
    );

    let out = assemble(&hooks, settings);
    assert_eq!(
        is_feature_enabled(&out, "editorskit", "writing", "markdown"),
        Some(false)
    );
    assert!(out["editorskit"].get("tools").is_none());
    assert!(out["editorskit"]["writing"]["items"].get("readingTime").is_none());
}

#[test]
fn test_only_the_catalog_key_is_added() {
    let hooks = registered_hooks();
    let mut settings = EditorSettings::new();
    settings.insert("alignWide".into(), json!(true));
    settings.insert("colors".into(), json!([{ "slug": "red" }]));

    let out = assemble(&hooks, settings.clone());
    assert_eq!(out.len(), settings.len() + 1);
    for (key, value) in &settings {
        assert_eq!(&out[key], value);
    }
    assert!(out.contains_key("editorskit"));
}

#[test]
fn test_independent_passes_are_identical() {
    let hooks = registered_hooks();
    let first = assemble(&hooks, EditorSettings::new());
    let second = assemble(&hooks, EditorSettings::new());
    assert_eq!(first, second);
}

#[test]
fn test_earlier_contributor_wins() {
    let hooks = SettingsHooks::new();
    hooks
        .add_filter(BLOCK_EDITOR_SETTINGS, "theme_defaults", 5, 1, |mut s, _| {
            s.insert("editorskit".into(), json!({ "tools": {} }));
            s
        })
        .unwrap();
    Registrar::new()
        .register(&hooks, Arc::new(SourceLabels), ProviderConfig::default())
        .unwrap();

    let out = assemble(&hooks, EditorSettings::new());
    assert_eq!(out["editorskit"], json!({ "tools": {} }));
    assert_eq!(
        hooks.filter_names(BLOCK_EDITOR_SETTINGS),
        vec!["theme_defaults", FILTER_NAME]
    );
}

#[test]
fn test_later_contributor_sees_catalog() {
    let hooks = registered_hooks();
    hooks
        .add_filter(BLOCK_EDITOR_SETTINGS, "disable_markdown", 20, 2, |mut s, _| {
            if let Some(flag) = s
                .get_mut("editorskit")
                .and_then(|c| c.pointer_mut("/writing/items/markdown/value"))
            {
                *flag = json!(false);
            }
            s
        })
        .unwrap();

    let out = assemble(&hooks, EditorSettings::new());
    assert_eq!(is_feature_enabled(&out, "editorskit", "writing", "markdown"), Some(false));
    assert_eq!(is_feature_enabled(&out, "editorskit", "writing", "readingTime"), Some(true));
}

#[test]
fn test_custom_key_and_translations() {
    let hooks = SettingsHooks::new();
    let mut table = TranslationTable::new();
    table.insert("editorskit", "Writing", "Schreiben");
    let config = ProviderConfig {
        config_key: "editorskitFeatures".to_string(),
        label_policy: LabelPolicy::Strict,
        ..ProviderConfig::default()
    };
    Registrar::new()
        .register(&hooks, Arc::new(table), config)
        .unwrap();

    let out = assemble(&hooks, EditorSettings::new());
    assert!(!out.contains_key("editorskit"));
    assert_eq!(out["editorskitFeatures"]["writing"]["label"], json!("Schreiben"));
}
