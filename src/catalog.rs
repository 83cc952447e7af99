//! Feature Catalog
//!
//! The built-in catalog is a data-only table ([`BUILTIN_CATALOG`]); turning it
//! into a [`FeatureCatalog`] value resolves every label through a
//! [`LabelLookup`]. Categories and features keep their declared order so the
//! editor renders them deterministically.

use crate::error::LabelError;
use crate::labels::{self, LabelLookup, LabelPolicy};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Settings key the catalog is stored under
pub const CONFIG_KEY: &str = "editorskit";

/// Text domain used for every label lookup
pub const TEXT_DOMAIN: &str = "editorskit";

/// Declared feature: key and untranslated label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub label: &'static str,
}

/// Declared category: key, untranslated label and member features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub name: &'static str,
    pub label: &'static str,
    pub items: &'static [FeatureSpec],
}

const fn feature(name: &'static str, label: &'static str) -> FeatureSpec {
    FeatureSpec { name, label }
}

pub const BUILTIN_CATALOG: &[CategorySpec] = &[
    CategorySpec {
        name: "visibility",
        label: "Visibility",
        items: &[
            feature("acf", "ACF Support"),
            feature("devices", "Devices"),
            feature("logic", "Display Logic"),
            feature("userState", "User Login State"),
        ],
    },
    CategorySpec {
        name: "formats",
        label: "Formats",
        items: &[
            feature("clearFormatting", "Clear Formatting"),
            feature("highlight", "Highlighted Text Color"),
            feature("justify", "Justified Alignment"),
            feature("link", "Link with \"rel\" Attributes"),
            feature("nonbreakingSpace", "Nonbreaking Space"),
            feature("subscript", "Subscript"),
            feature("superscript", "Superscript"),
            feature("colors", "Text Color"),
            feature("underline", "Underline"),
            feature("uppercase", "Uppercase"),
        ],
    },
    CategorySpec {
        name: "writing",
        label: "Writing",
        items: &[
            feature("readingTime", "Estimated Reading Time"),
            feature("headingLabel", "Heading Block Label"),
            feature("markdown", "Markdown"),
            feature(
                "transformEmpty",
                "Transform 4 Empty Paragraphs to Spacer Block",
            ),
        ],
    },
    CategorySpec {
        name: "options",
        label: "Block Options",
        items: &[
            feature("copy", "Copy Selected Block(s)"),
            feature("navigator", "Block Navigator"),
            feature("export", "Export as JSON"),
            feature("listBlockFontSize", "List Block Font Size"),
            feature("listBlockTextColor", "List Block Text Color"),
            feature("mediaTextLayout", "Media Text Block Layout"),
            feature("mediaTextLink", "Media Text Block Link"),
            feature("setAsFeatured", "Set Image Block as Featured"),
        ],
    },
    CategorySpec {
        name: "tools",
        label: "Tools",
        items: &[
            feature("guidelines", "Block Guide Lines"),
            feature("codeHighlight", "Code Editor Syntax Highlight"),
            feature("customClassNames", "Custom Class Names"),
            feature("dragAndDropFeatured", "Drag and Drop Featured Image"),
            feature("height", "Editor Min-Height"),
            feature("autosave", "Toggle Auto Save"),
            feature("help", "Help, tips and tricks"),
            feature("toggleTitle", "Toggle Title Visibility"),
            feature("scrollDown", "View Custom Fields"),
        ],
    },
    CategorySpec {
        name: "shortcuts",
        label: "Shortcuts",
        items: &[feature("selectParent", "Select Parent Block")],
    },
];

/// A single togglable capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    pub name: String,
    pub label: String,
    pub value: bool,
}

/// A named group of features
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCategory {
    pub name: String,
    pub label: String,
    #[serde(with = "keyed")]
    pub items: Vec<FeatureDescriptor>,
}

impl FeatureCategory {
    pub fn feature(&self, key: &str) -> Option<&FeatureDescriptor> {
        self.items.iter().find(|f| f.name == key)
    }
}

/// Root value injected into editor settings.
///
/// Serializes as an object keyed by category name, each category's `items`
/// keyed by feature name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCatalog {
    categories: Vec<FeatureCategory>,
}

impl FeatureCatalog {
    /// Build the built-in catalog, resolving every label in `domain`
    pub fn build(
        labels: &dyn LabelLookup,
        domain: &str,
        policy: LabelPolicy,
    ) -> Result<Self, LabelError> {
        Self::from_specs(BUILTIN_CATALOG, labels, domain, policy)
    }

    /// Build a catalog from an arbitrary declaration table
    pub fn from_specs(
        specs: &[CategorySpec],
        labels: &dyn LabelLookup,
        domain: &str,
        policy: LabelPolicy,
    ) -> Result<Self, LabelError> {
        let mut categories = Vec::with_capacity(specs.len());
        for spec in specs {
            // Category label first, then its items, in declaration order
            let label = labels::resolve(labels, spec.label, spec.name, domain, policy)?;
            let mut items = Vec::with_capacity(spec.items.len());
            for item in spec.items {
                items.push(FeatureDescriptor {
                    name: item.name.to_string(),
                    label: labels::resolve(labels, item.label, item.name, domain, policy)?,
                    value: true,
                });
            }
            categories.push(FeatureCategory {
                name: spec.name.to_string(),
                label,
                items,
            });
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[FeatureCategory] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&FeatureCategory> {
        self.categories.iter().find(|c| c.name == key)
    }

    pub fn feature(&self, category: &str, key: &str) -> Option<&FeatureDescriptor> {
        self.category(category).and_then(|c| c.feature(key))
    }

    /// Enabled flag of a feature, `None` if the feature is not in the catalog
    pub fn is_enabled(&self, category: &str, key: &str) -> Option<bool> {
        self.feature(category, key).map(|f| f.value)
    }

    /// Total number of feature descriptors
    pub fn feature_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// JSON form as stored in editor settings
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.categories
                .iter()
                .map(|c| (c.name.clone(), category_value(c)))
                .collect(),
        )
    }

    /// Read a catalog back out of its JSON form. Extra fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

fn category_value(category: &FeatureCategory) -> Value {
    let items = category
        .items
        .iter()
        .map(|f| {
            let mut item = serde_json::Map::new();
            item.insert("name".to_string(), Value::String(f.name.clone()));
            item.insert("label".to_string(), Value::String(f.label.clone()));
            item.insert("value".to_string(), Value::Bool(f.value));
            (f.name.clone(), Value::Object(item))
        })
        .collect();

    let mut out = serde_json::Map::new();
    out.insert("name".to_string(), Value::String(category.name.clone()));
    out.insert("label".to_string(), Value::String(category.label.clone()));
    out.insert("items".to_string(), Value::Object(items));
    Value::Object(out)
}

impl Serialize for FeatureCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        keyed::serialize(&self.categories, serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            categories: keyed::deserialize(deserializer)?,
        })
    }
}

/// Serde helpers for `Vec<T>` stored as an object keyed by each entry's name
mod keyed {
    use super::*;

    pub trait Keyed {
        fn key(&self) -> &str;
    }

    impl Keyed for FeatureCategory {
        fn key(&self) -> &str {
            &self.name
        }
    }

    impl Keyed for FeatureDescriptor {
        fn key(&self) -> &str {
            &self.name
        }
    }

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, T>(entries: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize + Keyed,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for entry in entries {
            map.serialize_entry(entry.key(), entry)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Vec<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by entry name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Vec<T>, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((_, entry)) = access.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
