use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue::Cue;
use crate::text_utils::clean_text;
use crate::time_utils::{parse_timestamp, round_to_millis};

// @module: SRT block segmentation and parsing

// @const: Blank-line separator between cue blocks
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

// @const: Purely numeric sequence index line
static INDEX_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

// @const: SRT timestamp range, comma or dot sub-second separator tolerated
static TIMESTAMP_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2}[,.]\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2}[,.]\d{3})").unwrap()
});

/// Parse an SRT document into a sequence of cues.
///
/// Best effort by design: malformed blocks (no timestamp range line, no text
/// after cleanup, inverted time range) are dropped rather than reported, which
/// suits noisy third-party subtitle files. Cue order follows block order in
/// the document; no re-sorting is performed. A whitespace-only document yields
/// an empty sequence.
pub fn parse_srt(document: &str, keep_markup: bool) -> Vec<Cue> {
    let unified = document.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = unified.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut cues = Vec::new();
    let mut dropped = 0usize;

    for block in BLOCK_SEPARATOR_REGEX.split(trimmed) {
        let mut lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            continue;
        }

        // Optional leading sequence index
        if INDEX_LINE_REGEX.is_match(lines[0]) {
            lines.remove(0);
        }

        let Some(range_line) = lines.first() else {
            continue;
        };
        let Some(captures) = TIMESTAMP_RANGE_REGEX.captures(range_line) else {
            dropped += 1;
            continue;
        };

        let start = round_to_millis(parse_timestamp(&captures[1]));
        let end = round_to_millis(parse_timestamp(&captures[2]));
        if end < start {
            warn!("Skipping cue with inverted time range: {} -> {}", start, end);
            dropped += 1;
            continue;
        }

        let text = clean_text(&lines[1..].join(" "), keep_markup);
        if text.is_empty() {
            dropped += 1;
            continue;
        }

        cues.push(Cue::new(start, end, text));
    }

    if dropped > 0 {
        debug!("parse_srt dropped {} malformed or empty block(s)", dropped);
    }

    cues
}
