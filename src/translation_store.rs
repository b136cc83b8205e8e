use anyhow::{Context, Result};
use log::info;
use once_cell::sync::Lazy;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::file_utils::FileManager;
use crate::models::{CharacterSource, Lang, Translation};
use crate::name_utils;

/// Translation store handling
///
/// The store is a YAML list of per-character translation records. It is the
/// only entity with a write-back side effect: the merge is a pure function
/// returning the updated records plus a changed flag, and the caller decides
/// whether to persist.
/// Japanese names exempt from the refresh-on-mismatch rule
///
/// Curated per-character fixups whose store value intentionally differs from
/// the derived one. Not general policy; extend only for specific characters.
static PROTECTED_JA_NAMES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["初音ミク"]));

/// Load the translation store, keyed by character id
pub fn load_translations(path: &Path) -> Result<BTreeMap<String, Translation>> {
    let records: Vec<Translation> = FileManager::read_yaml(path)
        .with_context(|| format!("Failed to load translation store: {:?}", path))?;

    Ok(records.into_iter().map(|t| (t.id.clone(), t)).collect())
}

/// Merge derived default translations into the store
///
/// Returns the updated records and whether anything changed. For each source
/// record, in input order:
/// - unknown ids adopt the derived default verbatim;
/// - a Japanese name differing from the derivation is refreshed (along with
///   the English name) unless it is a protected curated value, since a
///   mismatch means family-name data has become known;
/// - any language code missing from the name mapping is backfilled.
pub fn merge_translations(
    existing: &BTreeMap<String, Translation>,
    sources: &[CharacterSource],
) -> (BTreeMap<String, Translation>, bool) {
    let mut merged = existing.clone();
    let mut changed = false;

    for data in sources {
        let default_trans = name_utils::derive_default_translation(data);

        let trans = match merged.entry(data.id.clone()) {
            Entry::Vacant(slot) => {
                info!("New translation: {}", data.id);
                slot.insert(default_trans);
                changed = true;
                continue;
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };

        let default_ja = default_trans
            .name
            .get(&Lang::Ja)
            .cloned()
            .unwrap_or_default();
        let current_ja = trans.name.get(&Lang::Ja).cloned().unwrap_or_default();

        if current_ja != default_ja && !PROTECTED_JA_NAMES.contains(current_ja.as_str()) {
            info!("Update name: {}", default_ja);
            for lang in [Lang::Ja, Lang::En] {
                if let Some(value) = default_trans.name.get(&lang) {
                    trans.name.insert(lang, value.clone());
                }
            }
            changed = true;
        }

        for lang in Lang::ALL {
            if !trans.name.contains_key(&lang) {
                let value = default_trans.name.get(&lang).cloned().unwrap_or_default();
                trans.name.insert(lang, value);
                changed = true;
            }
        }
    }

    (merged, changed)
}

/// Rewrite the full translation store
///
/// Records are sorted by id case-insensitively; field order follows the
/// struct declaration so the file round-trips stably.
pub fn save_translations(path: &Path, translations: &BTreeMap<String, Translation>) -> Result<()> {
    let mut records: Vec<&Translation> = translations.values().collect();
    records.sort_by_key(|t| t.id.to_lowercase());

    FileManager::write_yaml(path, &records)
        .with_context(|| format!("Failed to write translation store: {:?}", path))
}
