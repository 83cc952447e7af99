//! Integration tests for the injected catalog's contents

use super::test_utils::{assemble, registered_hooks};
use editorskit_features::EditorSettings;
use serde_json::{json, Value};

const EXPECTED: &[(&str, &[&str])] = &[
    ("visibility", &["acf", "devices", "logic", "userState"]),
    (
        "formats",
        &[
            "clearFormatting",
            "highlight",
            "justify",
            "link",
            "nonbreakingSpace",
            "subscript",
            "superscript",
            "colors",
            "underline",
            "uppercase",
        ],
    ),
    ("writing", &["readingTime", "headingLabel", "markdown", "transformEmpty"]),
    (
        "options",
        &[
            "copy",
            "navigator",
            "export",
            "listBlockFontSize",
            "listBlockTextColor",
            "mediaTextLayout",
            "mediaTextLink",
            "setAsFeatured",
        ],
    ),
    (
        "tools",
        &[
            "guidelines",
            "codeHighlight",
            "customClassNames",
            "dragAndDropFeatured",
            "height",
            "autosave",
            "help",
            "toggleTitle",
            "scrollDown",
        ],
    ),
    ("shortcuts", &["selectParent"]),
];

fn injected() -> Value {
    let hooks = registered_hooks();
    let out = assemble(&hooks, EditorSettings::new());
    out.get("editorskit").cloned().unwrap()
}

#[test]
fn test_exact_categories_and_features_in_order() {
    let catalog = injected();
    let categories = catalog.as_object().unwrap();
    let keys: Vec<&str> = categories.keys().map(String::as_str).collect();
    let expected: Vec<&str> = EXPECTED.iter().map(|(c, _)| *c).collect();
    assert_eq!(keys, expected);

    for (category, features) in EXPECTED {
        let items = catalog[*category]["items"].as_object().unwrap();
        let keys: Vec<&str> = items.keys().map(String::as_str).collect();
        assert_eq!(keys.as_slice(), *features, "features of {}", category);
        for feature in *features {
            assert_eq!(items[*feature]["value"], json!(true), "{}.{}", category, feature);
        }
    }
}

#[test]
fn test_names_match_keys() {
    let catalog = injected();
    for (key, category) in catalog.as_object().unwrap() {
        assert_eq!(category["name"], json!(key));
        for (feature_key, feature) in category["items"].as_object().unwrap() {
            assert_eq!(feature["name"], json!(feature_key));
        }
    }
}

#[test]
fn test_markdown_example() {
    let catalog = injected();
    assert_eq!(
        catalog["writing"]["items"]["markdown"],
        json!({ "name": "markdown", "label": "Markdown", "value": true })
    );
}

#[test]
fn test_catalog_reads_back_into_typed_form() {
    let catalog = editorskit_features::FeatureCatalog::from_value(&injected()).unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.feature_count(), 36);
    assert_eq!(
        catalog.feature("tools", "help").unwrap().label,
        "Help, tips and tricks"
    );
}
