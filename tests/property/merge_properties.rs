//! Property-based tests: the merge only ever adds the catalog key

use editorskit_features::config::ProviderConfig;
use editorskit_features::hooks::BLOCK_EDITOR_SETTINGS;
use editorskit_features::labels::SourceLabels;
use editorskit_features::{EditingContext, EditorSettings, Registrar, SettingsHooks};
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;

fn hooks() -> SettingsHooks {
    let hooks = SettingsHooks::new();
    Registrar::new()
        .register(&hooks, Arc::new(SourceLabels), ProviderConfig::default())
        .unwrap();
    hooks
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::String),
    ]
}

fn settings() -> impl Strategy<Value = EditorSettings> {
    prop::collection::btree_map("[a-zA-Z]{1,10}", leaf(), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn test_unrelated_keys_preserved(input in settings()) {
        let hooks = hooks();
        let out = hooks.apply(BLOCK_EDITOR_SETTINGS, input.clone(), &EditingContext::default());

        let already_set = input.get("editorskit").is_some_and(|v| !v.is_null());
        for (key, value) in input.iter().filter(|(k, _)| k.as_str() != "editorskit") {
            prop_assert_eq!(out.get(key), Some(value));
        }
        let added = usize::from(!input.contains_key("editorskit"));
        prop_assert_eq!(out.len(), input.len() + added);
        if already_set {
            prop_assert_eq!(&out["editorskit"], &input["editorskit"]);
        } else {
            prop_assert!(out["editorskit"].is_object());
        }
    }

    #[test]
    fn test_present_key_returns_input(
        input in settings(),
        existing in leaf().prop_filter("null counts as unset", |v| !v.is_null()),
    ) {
        let hooks = hooks();
        let mut input = input;
        input.insert("editorskit".to_string(), existing);

        let out = hooks.apply(BLOCK_EDITOR_SETTINGS, input.clone(), &EditingContext::default());
        prop_assert_eq!(out, input);
    }
}
