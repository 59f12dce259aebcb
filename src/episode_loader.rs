/*!
 * Episode subtitle loading and caching.
 *
 * The loader resolves an episode key through the catalog, fetches the
 * subtitle payload from an injected resource provider, normalizes every
 * record to the canonical cue shape, and memoizes the result per key. The
 * cache is append-only: an entry is computed once and lives as long as the
 * loader. Concurrent loads of the same uncached key share one in-flight
 * future, so the fetch and parse work is done exactly once.
 */

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared, WeakShared};
use log::{debug, warn};
use parking_lot::{Mutex, RwLock};
use reqwest::Client;
use serde_json::Value;

use crate::app_config::EpisodeCatalog;
use crate::cue::Cue;
use crate::errors::LoadError;
use crate::record::{normalize_record, payload_records};
use crate::srt_parser::parse_srt;

/// Shared, immutable cue sequence handed out by the cache
pub type CueList = Arc<Vec<Cue>>;

type InFlightLoad = Shared<BoxFuture<'static, Result<CueList, LoadError>>>;
type PendingLoad = WeakShared<BoxFuture<'static, Result<CueList, LoadError>>>;

/// Source of raw subtitle resources, keyed by locator string.
///
/// Implementations cover the network (in-player loading) and the file system
/// (batch conversion, tests); the loader does not care which it talks to.
#[async_trait]
pub trait ResourceProvider: Send + Sync + Debug {
    /// Fetch the resource at `locator` as UTF-8 text
    async fn fetch_text(&self, locator: &str) -> Result<String, LoadError>;
}

/// HTTP resource provider backed by reqwest.
#[derive(Debug)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
}

impl HttpProvider {
    /// Create a provider resolving relative locators against `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        HttpProvider {
            client,
            base_url: base_url.into(),
        }
    }

    fn resolve_url(&self, locator: &str) -> String {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            locator.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                locator.trim_start_matches('/')
            )
        }
    }
}

#[async_trait]
impl ResourceProvider for HttpProvider {
    async fn fetch_text(&self, locator: &str) -> Result<String, LoadError> {
        let url = self.resolve_url(locator);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::fetch(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::fetch(&url, format!("HTTP status {}", status)));
        }

        response.text().await.map_err(|e| LoadError::fetch(&url, e))
    }
}

/// File system resource provider rooted at a directory.
#[derive(Debug)]
pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    /// Create a provider resolving locators relative to `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileProvider { root: root.into() }
    }
}

#[async_trait]
impl ResourceProvider for FileProvider {
    async fn fetch_text(&self, locator: &str) -> Result<String, LoadError> {
        let path = self.root.join(locator);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LoadError::fetch(path.display().to_string(), e))
    }
}

/// Episode subtitle loader with a per-key cache.
///
/// Both the catalog and the resource provider are injected at construction,
/// so tests can isolate the cache behavior with a mock provider. A pending
/// load is abandoned by dropping the future; no work outlives its callers.
pub struct EpisodeLoader {
    provider: Arc<dyn ResourceProvider>,
    catalog: EpisodeCatalog,
    cache: Arc<RwLock<HashMap<String, CueList>>>,
    in_flight: Arc<Mutex<HashMap<String, PendingLoad>>>,
}

impl EpisodeLoader {
    /// Create a loader over a provider and an explicit catalog
    pub fn new(provider: Arc<dyn ResourceProvider>, catalog: EpisodeCatalog) -> Self {
        EpisodeLoader {
            provider,
            catalog,
            cache: Arc::new(RwLock::new(HashMap::new())),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a loader with the built-in episode catalog
    pub fn with_default_catalog(provider: Arc<dyn ResourceProvider>) -> Self {
        Self::new(provider, EpisodeCatalog::default())
    }

    /// The catalog backing this loader
    pub fn catalog(&self) -> &EpisodeCatalog {
        &self.catalog
    }

    /// Number of episodes currently cached
    pub fn cached_episodes(&self) -> usize {
        self.cache.read().len()
    }

    /// Load the normalized cue sequence for an episode key.
    ///
    /// Returns the cached sequence when present without touching the
    /// provider. An unknown key fails before any fetch is attempted. On a
    /// miss, concurrent callers for the same key share a single fetch.
    pub async fn load_episode(&self, key: &str) -> Result<CueList, LoadError> {
        if let Some(cues) = self.cache.read().get(key) {
            debug!("Cache hit for episode {}", key);
            return Ok(Arc::clone(cues));
        }

        let locator = self
            .catalog
            .resolve(key)
            .ok_or_else(|| LoadError::UnknownEpisode(key.to_string()))?
            .to_string();

        let load = {
            let mut in_flight = self.in_flight.lock();
            // The map only holds weak handles, so a load whose callers all
            // dropped mid-flight upgrades to None and is started over
            match in_flight.get(key).and_then(PendingLoad::upgrade) {
                Some(pending) => {
                    debug!("Joining in-flight load for episode {}", key);
                    pending
                }
                None => {
                    let future: InFlightLoad = fetch_and_store(
                        Arc::clone(&self.provider),
                        key.to_string(),
                        locator,
                        Arc::clone(&self.cache),
                        Arc::clone(&self.in_flight),
                    )
                    .boxed()
                    .shared();
                    if let Some(weak) = future.downgrade() {
                        in_flight.insert(key.to_string(), weak);
                    }
                    future
                }
            }
        };

        load.await
    }

    /// Fetch a raw SRT document at `locator` and parse it directly.
    ///
    /// This path bypasses the episode cache: every call re-fetches and
    /// re-parses. An empty sequence (nothing parsed) is not an error.
    pub async fn load_srt(&self, locator: &str) -> Result<Vec<Cue>, LoadError> {
        let document = self.provider.fetch_text(locator).await?;
        Ok(parse_srt(&document, false))
    }
}

/// One full load: fetch, normalize, publish to the cache, release the
/// in-flight slot. Failures leave the cache untouched so a later call can
/// retry.
async fn fetch_and_store(
    provider: Arc<dyn ResourceProvider>,
    key: String,
    locator: String,
    cache: Arc<RwLock<HashMap<String, CueList>>>,
    in_flight: Arc<Mutex<HashMap<String, PendingLoad>>>,
) -> Result<CueList, LoadError> {
    let result = fetch_and_normalize(provider.as_ref(), &locator)
        .await
        .map(Arc::new);

    if let Ok(cues) = &result {
        // First writer wins; entries are never overwritten
        cache
            .write()
            .entry(key.clone())
            .or_insert_with(|| Arc::clone(cues));
        debug!("Cached {} cue(s) for episode {}", cues.len(), key);
    }

    in_flight.lock().remove(&key);
    result
}

async fn fetch_and_normalize(
    provider: &dyn ResourceProvider,
    locator: &str,
) -> Result<Vec<Cue>, LoadError> {
    let body = provider.fetch_text(locator).await?;
    let payload: Value = serde_json::from_str(&body).map_err(|e| LoadError::Decode {
        locator: locator.to_string(),
        message: e.to_string(),
    })?;

    let records = payload_records(&payload);
    let mut cues = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        match normalize_record(record) {
            Some(cue) => cues.push(cue),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("Dropped {} unrecognized record(s) from {}", dropped, locator);
    }
    if cues.is_empty() {
        warn!("No cues normalized from {}", locator);
    }

    Ok(cues)
}
