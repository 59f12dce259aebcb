/*!
 * Batch conversion of SRT sources to canonical JSON artifacts.
 *
 * The converter walks a fixed episode table in key order, parses each SRT
 * source with the same parser the live loader uses, and writes one
 * pretty-printed JSON array per episode. A missing or failing source is
 * reported and skipped; it never aborts the rest of the batch.
 */

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};

use crate::app_config::{json_artifact_name, Config};
use crate::file_utils::FileManager;
use crate::srt_parser::parse_srt;

/// Outcome counts for one batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Sources parsed and written successfully
    pub converted: usize,

    /// Sources that did not exist
    pub missing: usize,

    /// Sources that failed to read, parse, or write
    pub failed: usize,
}

impl ConversionReport {
    /// Whether any source failed (missing sources are not failures)
    pub fn had_failures(&self) -> bool {
        self.failed > 0
    }

    /// Total number of table entries processed
    pub fn total(&self) -> usize {
        self.converted + self.missing + self.failed
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Conversion completed: {} converted, {} missing, {} failed ({} total)",
            self.converted,
            self.missing,
            self.failed,
            self.total()
        )
    }
}

/// One-shot SRT to JSON batch converter
pub struct BatchConverter {
    config: Config,
}

impl BatchConverter {
    /// Create a converter over a conversion configuration
    pub fn new(config: Config) -> Self {
        BatchConverter { config }
    }

    /// Process every entry of the episode table, in key order.
    ///
    /// Returns the per-file outcome counts; the caller decides how a failed
    /// count maps to an exit status.
    pub fn run(&self) -> Result<ConversionReport> {
        FileManager::ensure_dir(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.config.output_dir.display()
            )
        })?;

        let progress = ProgressBar::new(self.config.episodes.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner} [{bar:40}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style);

        let mut report = ConversionReport::default();

        for (key, source_name) in &self.config.episodes {
            progress.set_message(key.clone());

            let source = self.config.source_dir.join(source_name);
            if !FileManager::file_exists(&source) {
                warn!("Source not found for {}: {}", key, source.display());
                report.missing += 1;
                progress.inc(1);
                continue;
            }

            match self.convert_one(key, &source) {
                Ok(count) => {
                    info!("Converted {} cue(s) for {}", count, key);
                    report.converted += 1;
                }
                Err(e) => {
                    error!("Failed to convert {}: {:#}", source.display(), e);
                    report.failed += 1;
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        info!("{}", report);

        Ok(report)
    }

    /// Convert a single SRT source and write its JSON artifact
    fn convert_one(&self, key: &str, source: &Path) -> Result<usize> {
        let content = FileManager::read_to_string(source)?;
        let cues = parse_srt(&content, self.config.keep_markup);
        if cues.is_empty() {
            warn!("No cues parsed from {}", source.display());
        }

        let json = serde_json::to_string_pretty(&cues)
            .with_context(|| format!("Failed to serialize cues for {}", key))?;

        let destination = self.config.output_dir.join(json_artifact_name(key));
        FileManager::write_to_file(&destination, &json)?;

        Ok(cues.len())
    }
}
