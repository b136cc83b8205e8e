/*!
 * Tests for the catalog data model
 */

use anyhow::Result;
use charcat::models::{normalize_lang_map, Lang};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Test that language codes round-trip through Display and FromStr
#[test]
fn test_lang_codes_shouldRoundTrip() -> Result<()> {
    for lang in Lang::ALL {
        assert_eq!(Lang::from_str(&lang.to_string())?, lang);
    }

    assert_eq!(Lang::from_str("ZH-CN")?, Lang::ZhCn);
    assert!(Lang::from_str("xx").is_err());
    Ok(())
}

/// Test that serde uses the kebab-case language codes
#[test]
fn test_lang_serialization_shouldUseKebabCaseCodes() -> Result<()> {
    assert_eq!(serde_json::to_string(&Lang::ZhTw)?, "\"zh-tw\"");
    assert_eq!(serde_json::from_str::<Lang>("\"ja\"")?, Lang::Ja);
    Ok(())
}

/// Test normalization of partial name mappings
#[test]
fn test_normalize_lang_map_withMissingAndNullValues_shouldFillEmptyStrings() {
    let mut partial: BTreeMap<Lang, Option<String>> = BTreeMap::new();
    partial.insert(Lang::Ja, Some("アビドス".to_string()));
    partial.insert(Lang::En, None);

    let normalized = normalize_lang_map(&partial);

    assert_eq!(normalized.len(), Lang::ALL.len());
    assert_eq!(normalized[&Lang::Ja], "アビドス");
    assert_eq!(normalized[&Lang::En], "");
    assert_eq!(normalized[&Lang::ZhTw], "");
}
