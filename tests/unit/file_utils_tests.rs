/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use charcat::file_utils::FileManager;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::common;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    id: String,
    count: u32,
}

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("test_subdir");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.is_dir());
    Ok(())
}

/// Test that write_to_file creates parent directories and content
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("nested/dir/report.txt");

    FileManager::write_to_file(&test_file, "generated")?;

    assert_eq!(fs::read_to_string(&test_file)?, "generated");
    Ok(())
}

/// Test that read_json deserializes a typed value
#[test]
fn test_read_json_withValidFile_shouldDeserialize() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        temp_dir.path(),
        "sample.json",
        r#"{"id": "alpha", "count": 3}"#,
    )?;

    let sample: Sample = FileManager::read_json(&test_file)?;

    assert_eq!(
        sample,
        Sample {
            id: "alpha".to_string(),
            count: 3
        }
    );
    Ok(())
}

/// Test that read_json reports parse errors with the file path
#[test]
fn test_read_json_withMalformedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "bad.json", "{not json")?;

    let result: Result<Sample> = FileManager::read_json(&test_file);

    assert!(result.is_err());
    Ok(())
}

/// Test that YAML values round-trip through write_yaml and read_yaml
#[test]
fn test_write_yaml_withTypedValue_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("sample.yaml");
    let sample = Sample {
        id: "alpha".to_string(),
        count: 3,
    };

    FileManager::write_yaml(&test_file, &sample)?;
    let loaded: Sample = FileManager::read_yaml(&test_file)?;

    assert_eq!(loaded, sample);
    Ok(())
}

/// Test that read_line_set trims lines and drops empty ones
#[test]
fn test_read_line_set_withBlankLines_shouldTrimAndSkip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(
        temp_dir.path(),
        "excluded.txt",
        "  Portrait_A  \n\nPortrait_B\n   \n",
    )?;

    let lines = FileManager::read_line_set(&test_file)?;

    assert_eq!(lines.len(), 2);
    assert!(lines.contains("Portrait_A"));
    assert!(lines.contains("Portrait_B"));
    Ok(())
}
