use std::fmt;

use serde::{Deserialize, Serialize};

// @module: Canonical subtitle cue

/// A single timed subtitle entry, the canonical unit of output.
///
/// Both parsers and the shape normalizer converge on this record; the batch
/// converter serializes sequences of it as pretty-printed JSON arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Start time in seconds, inclusive
    pub start: f64,

    /// End time in seconds; `end >= start` is enforced at parse time
    pub end: f64,

    /// Primary-language text, cleaned and non-empty for emitted cues
    pub en: String,

    /// Secondary-language text, filled externally; defaults to empty
    #[serde(default)]
    pub vi: String,
}

impl Cue {
    /// Create a cue with an empty secondary-language slot
    pub fn new(start: f64, end: f64, en: impl Into<String>) -> Self {
        Cue {
            start,
            end,
            en: en.into(),
            vi: String::new(),
        }
    }

    /// Duration of the cue in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:.3} -> {:.3}] {}", self.start, self.end, self.en)?;
        if !self.vi.is_empty() {
            write!(f, " / {}", self.vi)?;
        }
        Ok(())
    }
}
