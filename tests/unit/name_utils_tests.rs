/*!
 * Tests for name derivation utilities
 */

use charcat::models::{CharacterSource, Lang, LangMap};
use charcat::name_utils::{
    derive_default_translation, derive_short_names, display_name_from_id, romanize,
};

/// Build a raw record with the given id and name parts
fn make_source(
    id: &str,
    family_name: &str,
    family_name_ruby: &str,
    personal_name: &str,
    personal_name_ruby: &str,
    family_name_kr: &str,
    personal_name_kr: &str,
) -> CharacterSource {
    CharacterSource {
        id: id.to_string(),
        family_name: family_name.to_string(),
        family_name_ruby: family_name_ruby.to_string(),
        personal_name: personal_name.to_string(),
        personal_name_ruby: personal_name_ruby.to_string(),
        family_name_kr: family_name_kr.to_string(),
        personal_name_kr: personal_name_kr.to_string(),
        image_files: Vec::new(),
    }
}

/// Test that katakana readings romanize to capitalized ASCII
#[test]
fn test_romanize_withKatakanaRuby_shouldCapitalizeRomaji() {
    assert_eq!(romanize("タカナシ"), "Takanashi");
    assert_eq!(romanize("ホシノ"), "Hoshino");
    assert_eq!(romanize("リクハチマ"), "Rikuhachima");
}

/// Test that ASCII input passes through with word capitalization
#[test]
fn test_romanize_withAsciiInput_shouldCapitalizeWords() {
    assert_eq!(romanize("alice smith"), "Alice Smith");
    assert_eq!(romanize("  alice   smith  "), "Alice Smith");
    assert_eq!(romanize(""), "");
}

/// Test identifier-derived English names: capitalization and npc filtering
#[test]
fn test_display_name_from_id_withNpcSegments_shouldDropNpcToken() {
    assert_eq!(display_name_from_id("npc_shop_keeper"), "Shop Keeper");
    assert_eq!(display_name_from_id("shop_keeper"), "Shop Keeper");
    assert_eq!(display_name_from_id("hifumi"), "Hifumi");
}

/// Test the default derivation for a family-named character with both readings
#[test]
fn test_derive_default_translation_withFamilyAndRuby_shouldRomanizeBoth() {
    let source = make_source(
        "hoshino",
        "小鳥遊",
        "タカナシ",
        "ホシノ",
        "ホシノ",
        "타카나시",
        "호시노",
    );

    let trans = derive_default_translation(&source);

    assert_eq!(trans.id, "hoshino");
    assert_eq!(trans.name[&Lang::Ja], "小鳥遊 ホシノ");
    assert_eq!(trans.name[&Lang::En], "Takanashi Hoshino");
    assert_eq!(trans.name[&Lang::Ko], "타카나시 호시노");
    assert_eq!(trans.name[&Lang::ZhCn], "");
    assert_eq!(trans.name[&Lang::ZhTw], "");
    assert!(trans.short_name.is_none());
}

/// Test that a missing personal reading falls back to the raw id
#[test]
fn test_derive_default_translation_withMissingPersonalRuby_shouldUseIdAsDisambiguator() {
    let source = make_source("hoshino", "小鳥遊", "タカナシ", "ホシノ", "", "", "호시노");

    let trans = derive_default_translation(&source);

    assert_eq!(trans.name[&Lang::En], "Takanashi hoshino");
    // Korean trims when one part is empty
    assert_eq!(trans.name[&Lang::Ko], "호시노");
}

/// Test the default derivation for an NPC-style record without a family name
#[test]
fn test_derive_default_translation_withoutFamilyName_shouldDeriveFromId() {
    let source = make_source("npc_shop_keeper", "", "", "店主", "", "", "");

    let trans = derive_default_translation(&source);

    assert_eq!(trans.name[&Lang::Ja], "店主");
    assert_eq!(trans.name[&Lang::En], "Shop Keeper");
    assert_eq!(trans.name[&Lang::Ko], "");
}

/// Test short-name fallback to the last whitespace token
#[test]
fn test_derive_short_names_withoutCuratedNames_shouldUseLastToken() {
    let names: LangMap = [
        (Lang::Ja, "小鳥遊 ホシノ".to_string()),
        (Lang::En, "Alice Smith".to_string()),
        (Lang::Ko, "".to_string()),
    ]
    .into_iter()
    .collect();

    let short_names = derive_short_names(None, &names);

    assert_eq!(short_names[&Lang::En], "Smith");
    assert_eq!(short_names[&Lang::Ja], "ホシノ");
    assert_eq!(short_names[&Lang::Ko], "");
    // Languages absent from the name map still get an entry
    assert_eq!(short_names[&Lang::ZhCn], "");
}

/// Test that curated short names win over the derived fallback
#[test]
fn test_derive_short_names_withCuratedName_shouldKeepCuratedValue() {
    let names: LangMap = [(Lang::En, "Alice Smith".to_string())].into_iter().collect();
    let curated: LangMap = [
        (Lang::En, "Ali".to_string()),
        (Lang::Ja, "".to_string()),
    ]
    .into_iter()
    .collect();

    let short_names = derive_short_names(Some(&curated), &names);

    assert_eq!(short_names[&Lang::En], "Ali");
    // An empty curated value falls back to derivation
    assert_eq!(short_names[&Lang::Ja], "");
}
