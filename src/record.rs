use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::cue::Cue;
use crate::time_utils::parse_timestamp;

// @module: Normalization of pre-digested JSON subtitle records

// @const: Arrow-like separator inside a composite time string ("->" or "-->")
static ARROW_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*-+>\s*").unwrap());

/// One known input shape, discriminated structurally.
///
/// The accepted variants are enumerated here and matched by serde in order,
/// so a record either satisfies one variant completely or is unrecognized;
/// there is no cross-shape field scavenging.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceRecord {
    /// Already timed in seconds: `{start, end, text?, en?, vi?}`
    Timed {
        #[serde(deserialize_with = "coerce_seconds")]
        start: f64,
        #[serde(deserialize_with = "coerce_seconds")]
        end: f64,
        #[serde(default)]
        text: String,
        #[serde(default)]
        en: String,
        #[serde(default)]
        vi: String,
    },

    /// Timestamps embedded in a composite string: `{time: "A -> B", en?, vi?}`
    TimeRange {
        time: String,
        #[serde(default)]
        en: String,
        #[serde(default)]
        vi: String,
    },
}

/// Accept a JSON number or a numeric string as a seconds value.
fn coerce_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| de::Error::custom("seconds value not representable as f64")),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom("non-numeric seconds value")),
        other => Err(de::Error::custom(format!(
            "expected number or numeric string, got {}",
            other
        ))),
    }
}

/// Map a single pre-digested record to the canonical cue shape.
///
/// Returns `None` for unrecognized shapes; the caller filters those out of
/// the result sequence. This is a permissive normalizer, not a validator.
pub fn normalize_record(value: &Value) -> Option<Cue> {
    let record: SourceRecord = serde_json::from_value(value.clone()).ok()?;

    let cue = match record {
        SourceRecord::Timed { start, end, text, en, vi } => {
            // `text` takes precedence over `en`, but an empty `text` falls
            // through, matching the original data files
            let en = if text.is_empty() { en } else { text };
            Cue { start, end, en, vi }
        }
        SourceRecord::TimeRange { time, en, vi } => {
            let mut halves = ARROW_REGEX.splitn(&time, 2);
            let start = parse_timestamp(halves.next().unwrap_or_default());
            let end = parse_timestamp(halves.next().unwrap_or_default());
            Cue { start, end, en, vi }
        }
    };

    Some(cue)
}

/// Pull the record list out of a subtitle payload.
///
/// A payload is either a bare JSON array of records or a keyed object with a
/// `lines` array; anything else is treated as empty.
pub fn payload_records(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(records) => records,
        Value::Object(map) => map
            .get("lines")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}
