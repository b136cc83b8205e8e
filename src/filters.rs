use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

use crate::file_utils::FileManager;
use crate::models::{normalize_lang_map, FilterGroup, GroupLangEntry, LangMap};

// @module: Filter group construction

/// Filter categories, in display order
const FILTER_CATEGORIES: [&str; 2] = ["schools", "clubs"];

/// Display-label table for the group categories
const GROUP_TYPES_FILE: &str = "lang/group_types.yaml";

/// Build the filterable group listings
///
/// One FilterGroup per category, groups sorted ascending by id, every name
/// mapping normalized so all supported languages are present, and all
/// selection flags initialized to false.
pub fn build_filters(data_dir: &Path) -> Result<Vec<FilterGroup>> {
    let types_path = data_dir.join(GROUP_TYPES_FILE);
    let type_names: BTreeMap<String, LangMap> = FileManager::read_yaml(&types_path)
        .with_context(|| format!("Failed to load group type labels: {:?}", types_path))?;

    let mut result = Vec::new();
    for key in FILTER_CATEGORIES {
        let lang_file = data_dir.join("lang").join(format!("{key}.yaml"));
        let mut groups: Vec<GroupLangEntry> = FileManager::read_yaml(&lang_file)
            .with_context(|| format!("Failed to load group translations: {:?}", lang_file))?;
        groups.sort_by(|a, b| a.id.cmp(&b.id));

        let label = type_names
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("No display label for group type '{}'", key))?;

        let ids: Vec<String> = groups.iter().map(|gp| gp.id.clone()).collect();
        let names: Vec<LangMap> = groups.iter().map(|gp| normalize_lang_map(&gp.name)).collect();
        let selected = vec![false; ids.len()];

        result.push(FilterGroup {
            key: key.to_string(),
            label,
            ids,
            names,
            selected,
        });
    }

    Ok(result)
}
