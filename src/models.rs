use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// @module: Catalog data model

/// Language code for catalog entries
///
/// The catalog carries a fixed, closed set of display languages. Variant
/// order is the serialization order of name mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Lang {
    // @lang: Japanese
    #[serde(rename = "ja")]
    Ja,
    // @lang: English
    #[serde(rename = "en")]
    En,
    // @lang: Korean
    #[serde(rename = "ko")]
    Ko,
    // @lang: Simplified Chinese
    #[serde(rename = "zh-cn")]
    ZhCn,
    // @lang: Traditional Chinese
    #[serde(rename = "zh-tw")]
    ZhTw,
}

impl Lang {
    /// All supported languages, in serialization order
    pub const ALL: [Lang; 5] = [Lang::Ja, Lang::En, Lang::Ko, Lang::ZhCn, Lang::ZhTw];

    // @returns: Lowercase language code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
            Self::Ko => "ko",
            Self::ZhCn => "zh-cn",
            Self::ZhTw => "zh-tw",
        }
    }
}

// Implement Display trait for Lang
impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// Implement FromStr trait for Lang
impl std::str::FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            "ko" => Ok(Self::Ko),
            "zh-cn" => Ok(Self::ZhCn),
            "zh-tw" => Ok(Self::ZhTw),
            _ => Err(anyhow!("Invalid language code: {}", s)),
        }
    }
}

/// Per-language string mapping (display names, labels)
pub type LangMap = BTreeMap<Lang, String>;

/// Fill a name mapping so every supported language is present,
/// substituting the empty string for missing values
pub fn normalize_lang_map(map: &BTreeMap<Lang, Option<String>>) -> LangMap {
    Lang::ALL
        .iter()
        .map(|lang| {
            let value = map.get(lang).and_then(|v| v.clone()).unwrap_or_default();
            (*lang, value)
        })
        .collect()
}

/// Raw per-character input record
///
/// Loaded once from the character data file and never mutated. Name parts
/// may be empty; `image_files` holds extension-less path fragments relative
/// to the asset root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSource {
    pub id: String,

    // @field: Family name (Japanese script), empty for NPC-style entries
    #[serde(default)]
    pub family_name: String,

    // @field: Furigana reading of the family name
    #[serde(default)]
    pub family_name_ruby: String,

    // @field: Personal name (Japanese script)
    #[serde(default)]
    pub personal_name: String,

    // @field: Furigana reading of the personal name
    #[serde(default)]
    pub personal_name_ruby: String,

    // @field: Korean family name
    #[serde(default)]
    pub family_name_kr: String,

    // @field: Korean personal name
    #[serde(default)]
    pub personal_name_kr: String,

    // @field: Referenced portrait files, relative and extension-less
    #[serde(default)]
    pub image_files: Vec<String>,
}

/// Manually curated group definition (club or school)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDefinition {
    pub id: String,

    /// Localized display metadata
    #[serde(default)]
    pub name: LangMap,

    /// Member character ids
    #[serde(default)]
    pub members: Vec<String>,
}

impl GroupDefinition {
    // @checks: Group membership by character id
    pub fn contains(&self, char_id: &str) -> bool {
        self.members.iter().any(|m| m == char_id)
    }
}

/// Per-character translation record from the translation store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub id: String,

    /// Display name per language
    pub name: LangMap,

    /// Abbreviated display name per language, when curated by hand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<LangMap>,
}

/// Normalized output character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: String,

    /// Full display name per language
    pub names: LangMap,

    /// Abbreviated display name per language
    pub short_names: LangMap,

    /// Placeholder, unused downstream
    pub relations: Vec<String>,

    /// Canonical portrait names, sorted lexicographically
    pub images: Vec<String>,

    /// Ids of every group the character belongs to, id-sorted
    pub groups: Vec<String>,
}

/// Rendering hint for a resolved image file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageHint {
    // @field: Horizontal crop alignment
    pub h_crop: CropAlignment,
}

/// Crop alignment values understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropAlignment {
    Top,
}

/// Localized group record used for filter construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupLangEntry {
    pub id: String,

    /// Localized names; nulls are tolerated and normalized to ""
    #[serde(default)]
    pub name: BTreeMap<Lang, Option<String>>,
}

/// Selectable filter category exposed for catalog filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterGroup {
    /// Category key ("schools" or "clubs")
    pub key: String,

    /// Localized category label
    pub label: LangMap,

    /// Group ids, ascending
    pub ids: Vec<String>,

    /// Localized group names, parallel to `ids`
    pub names: Vec<LangMap>,

    /// Selection flags, parallel to `ids`, all false initially
    pub selected: Vec<bool>,
}

/// Full in-memory catalog produced by one builder run
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    /// Normalized characters, in input order
    pub characters: Vec<Character>,

    /// Canonical image name to resolved file path
    pub avatar_files: BTreeMap<String, PathBuf>,

    /// Per-file rendering hints
    pub image_config: BTreeMap<PathBuf, ImageHint>,

    /// Stamp image paths, ordered by stamp index
    pub stamps: Vec<PathBuf>,

    /// Filterable group listings
    pub filters: Vec<FilterGroup>,
}
