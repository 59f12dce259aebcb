use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module holds the episode vocabulary, the catalog resolving episode
/// keys to subtitle locators, and the batch conversion configuration.

/// Show identifier used in artifact and locator names
pub const SHOW_SLUG: &str = "suite-life";

/// Fixed episode key vocabulary
pub const EPISODE_KEYS: [&str; 5] = ["S01E01", "S01E02", "S01E03", "S01E04", "S01E05"];

/// Deterministic JSON artifact name for an episode key.
///
/// Shared by the batch converter (output file name) and the default catalog
/// (locator path), so converted artifacts are loadable without extra wiring.
pub fn json_artifact_name(key: &str) -> String {
    format!("{}_{}_complete.json", SHOW_SLUG, key.to_lowercase())
}

/// Mapping from episode key to subtitle locator.
///
/// Unknown keys are a lookup failure at load time, never a silent empty
/// result. The catalog is constructed once and handed to the loader; adding
/// an episode means extending this table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeCatalog {
    /// Key -> locator entries, iterated in key order
    entries: BTreeMap<String, String>,
}

impl EpisodeCatalog {
    /// Build a catalog from explicit entries
    pub fn from_entries(entries: BTreeMap<String, String>) -> Self {
        EpisodeCatalog { entries }
    }

    /// Resolve an episode key to its locator
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Known episode keys, in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of catalogued episodes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EpisodeCatalog {
    fn default() -> Self {
        let entries = EPISODE_KEYS
            .iter()
            .map(|key| (key.to_string(), format!("subs/{}", json_artifact_name(key))))
            .collect();
        EpisodeCatalog { entries }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Batch conversion configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory containing the source SRT files
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory receiving the converted JSON artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Episode key -> source SRT file name, processed in key order
    #[serde(default = "default_episode_sources")]
    pub episodes: BTreeMap<String, String>,

    /// Whether to keep markup tags in cue text
    #[serde(default)]
    pub keep_markup: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from a file if it exists, defaults otherwise
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            episodes: default_episode_sources(),
            keep_markup: false,
            log_level: LogLevel::default(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("subs")
}

fn default_episode_sources() -> BTreeMap<String, String> {
    let sources = [
        ("S01E01", "The.Suite.Life.of.Zack.and.Cody.S01E01.WEBRip.x264-SRS.srt"),
        ("S01E02", "The.Suite.Life.of.Zack.and.Cody.S01E02.WEBRip.x264-SRS.srt"),
        ("S01E03", "The.Suite.Life.of.Zack.and.Cody.S01E03.WEBRip.x264-SRS.srt"),
        ("S01E04", "Suite Life S1 E4.srt"),
        ("S01E05", "The.Suite.Life.of.Zack.and.Cody.S01E05.WEBRip.x264-SRS.srt"),
    ];
    sources
        .iter()
        .map(|(key, file)| (key.to_string(), file.to_string()))
        .collect()
}
