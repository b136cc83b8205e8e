use deunicode::deunicode;

use crate::models::{CharacterSource, Lang, LangMap, Translation};

/// Name derivation utilities
///
/// This module derives default multilingual display names from raw
/// character records: romanizing furigana readings, capitalizing
/// identifier-derived names, and filling short names from full names.
/// Token filtered out of identifier-derived English names
const NPC_TOKEN: &str = "npc";

/// Capitalize the first letter of a word, leaving the rest untouched
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Romanize a furigana reading into a capitalized ASCII name
///
/// Kana transliterate to lowercase romaji, so each word is capitalized
/// afterwards. Whitespace runs collapse to single spaces.
pub fn romanize(ruby: &str) -> String {
    deunicode(ruby)
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive an English display name from an underscore-separated id
///
/// Each segment is capitalized and space-joined; literal "npc" segments
/// are dropped. E.g. "npc_shop_keeper" becomes "Shop Keeper".
pub fn display_name_from_id(id: &str) -> String {
    id.split('_')
        .filter(|s| *s != NPC_TOKEN)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the default translation for a raw character record
///
/// Pure and deterministic given the source record; never touches storage.
/// Chinese names default to empty, awaiting manual curation.
pub fn derive_default_translation(data: &CharacterSource) -> Translation {
    let (jp_name, en_name, kr_name) = if !data.family_name.is_empty() {
        let jp_name = format!("{} {}", data.family_name, data.personal_name);
        // Family-named characters romanize from furigana; the raw id stands
        // in as a disambiguator when the personal reading is unknown
        let en_name = if !data.personal_name_ruby.is_empty() {
            format!(
                "{} {}",
                romanize(&data.family_name_ruby),
                romanize(&data.personal_name_ruby)
            )
        } else {
            format!("{} {}", romanize(&data.family_name_ruby), data.id)
        };
        let kr_name = format!("{} {}", data.family_name_kr, data.personal_name_kr)
            .trim()
            .to_string();
        (jp_name, en_name, kr_name)
    } else {
        (
            data.personal_name.clone(),
            display_name_from_id(&data.id),
            String::new(),
        )
    };

    let name: LangMap = [
        (Lang::Ja, jp_name),
        (Lang::En, en_name),
        (Lang::Ko, kr_name),
        (Lang::ZhCn, String::new()),
        (Lang::ZhTw, String::new()),
    ]
    .into_iter()
    .collect();

    Translation {
        id: data.id.clone(),
        name,
        short_name: None,
    }
}

/// Resolve short names for every supported language
///
/// Curated short names win; anything missing or empty falls back to the
/// last whitespace-separated token of that language's display name.
pub fn derive_short_names(existing: Option<&LangMap>, names: &LangMap) -> LangMap {
    Lang::ALL
        .iter()
        .map(|lang| {
            let curated = existing
                .and_then(|m| m.get(lang))
                .filter(|s| !s.is_empty())
                .cloned();
            let value = curated.unwrap_or_else(|| {
                names
                    .get(lang)
                    .map(|name| name.split_whitespace().last().unwrap_or("").to_string())
                    .unwrap_or_default()
            });
            (*lang, value)
        })
        .collect()
}
