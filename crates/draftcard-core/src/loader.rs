// Data-loading stage: fetch a member's profile, the player table and the
// league database, and hand the engine one immutable bundle.
//
// Fetches run sequentially: profile, then players, then league. Only the
// profile is required; the other two degrade to `None` with a warning.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, SourceConfig, SourceKind};
use crate::model::{LeagueDatabase, PlayerTable, Profile};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("no profile for member `{alias}` at {path}")]
    ProfileNotFound { alias: String, path: String },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// Somewhere JSON documents can be fetched from by relative path.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the document at `path`. `Ok(None)` means it does not exist.
    async fn fetch(&self, path: &str) -> Result<Option<String>, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Reads documents below a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self, path: &str) -> Result<Option<String>, LoadError> {
        let full = self.root.join(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LoadError::Io {
                path: full,
                source: e,
            }),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Issues GET requests below a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Option<String>, LoadError> {
        let url = self.url_for(path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Http {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LoadError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| LoadError::Http { url, source: e })?;
        Ok(Some(text))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Build the data source the configuration asks for.
pub fn source_from_config(config: &SourceConfig) -> Box<dyn DataSource> {
    match config.kind {
        SourceKind::File => Box::new(FileSource::new(&config.root)),
        SourceKind::Http => Box::new(HttpSource::new(&config.root)),
    }
}

// ---------------------------------------------------------------------------
// Input bundle
// ---------------------------------------------------------------------------

/// Everything the engine needs for one member. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct InputBundle {
    pub alias: String,
    pub profile: Profile,
    /// `None` when the player lookup could not be loaded.
    pub players: Option<PlayerTable>,
    /// `None` when the league database could not be loaded.
    pub league: Option<LeagueDatabase>,
}

/// Load one member's bundle.
///
/// A missing or malformed profile is an error. The player table and league
/// database are optional: any failure fetching or parsing them is logged and
/// the bundle carries `None` instead.
pub async fn load_bundle(
    source: &dyn DataSource,
    config: &Config,
    alias: &str,
) -> Result<InputBundle, LoadError> {
    let storage_key = config.storage_key(alias);
    let profile_path = config.source.profile_path(&storage_key);
    debug!(alias, path = %profile_path, from = %source.describe(), "loading profile");

    let text = source
        .fetch(&profile_path)
        .await?
        .ok_or_else(|| LoadError::ProfileNotFound {
            alias: alias.to_string(),
            path: profile_path.clone(),
        })?;
    let profile = Profile::from_json(&text).map_err(|e| LoadError::Parse {
        path: profile_path.clone(),
        source: e,
    })?;

    let players: Option<PlayerTable> = load_optional(source, &config.source.players_path).await;
    let league: Option<LeagueDatabase> = load_optional(source, &config.source.league_path).await;

    info!(
        alias,
        picks = profile.total_picks(),
        players = players.is_some(),
        league = league.is_some(),
        "loaded input bundle"
    );

    Ok(InputBundle {
        alias: alias.to_string(),
        profile,
        players,
        league,
    })
}

async fn load_optional<T>(source: &dyn DataSource, path: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = match source.fetch(path).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            warn!(path, "optional document not found; continuing without it");
            return None;
        }
        Err(e) => {
            warn!(path, error = %e, "failed to fetch optional document; continuing without it");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(path, error = %e, "malformed optional document; continuing without it");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
