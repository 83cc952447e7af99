//! CLI presentation: catalog and check rendering.

use crate::catalog::FeatureCatalog;
use crate::error::CatalogError;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

pub fn format_catalog_json(catalog: &FeatureCatalog) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// One row per feature, grouped by category in declared order
pub fn format_catalog_text(catalog: &FeatureCatalog) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Category", "Feature", "Label", "Enabled"]);
    for category in catalog.categories() {
        let heading = format!("{} ({})", category.label, category.name);
        for (i, item) in category.items.iter().enumerate() {
            let group = if i == 0 { heading.as_str() } else { "" };
            let enabled = if item.value { "yes" } else { "no" };
            table.add_row(vec![group, item.name.as_str(), item.label.as_str(), enabled]);
        }
    }
    format!(
        "{}\n{} categories, {} features",
        table,
        catalog.len(),
        catalog.feature_count()
    )
}

pub fn format_check_result(category: &str, feature: &str, enabled: Option<bool>) -> String {
    match enabled {
        Some(true) => format!("{}.{}: enabled", category, feature),
        Some(false) => format!("{}.{}: disabled", category, feature),
        None => format!("{}.{}: not in catalog", category, feature),
    }
}
