/*!
 * Error types for the subcue library.
 *
 * This module contains the error taxonomy for the episode loading path,
 * using the thiserror crate for ergonomic error definitions. Parse-level
 * problems are deliberately not errors: malformed blocks and unrecognized
 * record shapes are dropped by the parsers (best-effort contract).
 */

use thiserror::Error;

/// Errors that can occur while loading subtitles for an episode.
///
/// The type is `Clone` so that a single in-flight load can hand its outcome
/// to every concurrent caller sharing the same future.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    /// The episode key is not present in the catalog; no fetch is attempted
    #[error("unknown episode key: {0}")]
    UnknownEpisode(String),

    /// The resource provider failed or signalled a non-success status
    #[error("cannot load subtitles from {locator}: {message}")]
    Fetch {
        /// Locator that was being fetched
        locator: String,
        /// Provider-supplied failure description
        message: String,
    },

    /// The response body was not valid JSON
    #[error("invalid subtitle payload from {locator}: {message}")]
    Decode {
        /// Locator the payload came from
        locator: String,
        /// Decoder failure description
        message: String,
    },
}

impl LoadError {
    /// Shorthand for a fetch failure on a locator
    pub fn fetch(locator: impl Into<String>, message: impl ToString) -> Self {
        LoadError::Fetch {
            locator: locator.into(),
            message: message.to_string(),
        }
    }
}
