use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::StampError;

// @module: Stamp image listing

/// Stamp images live in a fixed directory under the asset root
const STAMP_DIR: &str = "assets/UIs/01_Common/31_ClanEmoji";

// @const: Locale-suffixed stamp filename pattern
static STAMP_FILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"_Jp\.png$").unwrap());

/// List stamp images ordered by their numeric index
///
/// Filenames follow `ClanChat_Emoji_<index>_Jp.png`; the index is the third
/// underscore-separated token. An absent stamp directory yields an empty
/// list; a matching file without a parsable index is an error.
pub fn list_stamps(res_root: &Path) -> Result<Vec<PathBuf>> {
    let dir = res_root.join(STAMP_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut indexed: Vec<(u32, PathBuf)> = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry.context("Failed to read stamp directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if !STAMP_FILE_REGEX.is_match(&file_name) {
            continue;
        }

        indexed.push((stamp_index(&file_name)?, path.to_path_buf()));
    }

    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed.into_iter().map(|(_, path)| path).collect())
}

/// Parse a stamp filename's numeric index
fn stamp_index(file_name: &str) -> Result<u32> {
    file_name
        .split('_')
        .nth(2)
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| {
            StampError::InvalidIndex {
                file_name: file_name.to_string(),
            }
            .into()
        })
}
