/*!
 * Tests for configuration and the episode catalog
 */

use anyhow::Result;
use subcue::app_config::{Config, EpisodeCatalog, LogLevel, EPISODE_KEYS};

use crate::common::{create_temp_dir, create_test_file};

/// The default catalog covers the full episode vocabulary
#[test]
fn test_episode_catalog_default_shouldCoverAllKeys() {
    let catalog = EpisodeCatalog::default();

    assert_eq!(catalog.len(), EPISODE_KEYS.len());
    for key in EPISODE_KEYS {
        assert!(catalog.resolve(key).is_some(), "missing key {}", key);
    }
    assert_eq!(
        catalog.resolve("S01E01"),
        Some("subs/suite-life_s01e01_complete.json")
    );
}

/// Unknown keys resolve to None
#[test]
fn test_episode_catalog_resolve_withUnknownKey_shouldReturnNone() {
    let catalog = EpisodeCatalog::default();
    assert_eq!(catalog.resolve("S99E99"), None);
    assert_eq!(catalog.resolve(""), None);
}

/// The default config carries the full source table
#[test]
fn test_config_default_shouldHaveAllEpisodeSources() {
    let config = Config::default();

    assert_eq!(config.episodes.len(), EPISODE_KEYS.len());
    assert_eq!(config.output_dir, std::path::PathBuf::from("subs"));
    assert!(!config.keep_markup);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Partial config files fall back to defaults per field
#[test]
fn test_config_from_file_withPartialJson_shouldUseDefaults() -> Result<()> {
    let temp = create_temp_dir()?;
    let path = create_test_file(
        &temp.path().to_path_buf(),
        "conf.json",
        r#"{"output_dir": "artifacts", "log_level": "debug"}"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.output_dir, std::path::PathBuf::from("artifacts"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.episodes.len(), EPISODE_KEYS.len());

    Ok(())
}

/// A missing config file yields the default configuration
#[test]
fn test_config_from_file_or_default_withMissingFile_shouldReturnDefault() -> Result<()> {
    let config = Config::from_file_or_default("definitely/not/here.json")?;
    assert_eq!(config.episodes.len(), EPISODE_KEYS.len());
    Ok(())
}

/// A malformed config file is an error, not a silent default
#[test]
fn test_config_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp = create_temp_dir()?;
    let path = create_test_file(&temp.path().to_path_buf(), "conf.json", "{ not json")?;

    assert!(Config::from_file(&path).is_err());
    Ok(())
}
