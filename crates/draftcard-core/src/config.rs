// Configuration loading and parsing (draftcard.toml).

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "draftcard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
    pub output_dir: PathBuf,
    /// Member alias -> storage key (profile file stem).
    pub members: BTreeMap<String, String>,
}

impl Config {
    /// File stem of a member's profile document.
    ///
    /// Configured members use their mapped key; anyone else falls back to the
    /// alias lowercased with whitespace runs collapsed to `-`.
    pub fn storage_key(&self, alias: &str) -> String {
        match self.members.get(alias) {
            Some(key) => key.clone(),
            None => fallback_storage_key(alias),
        }
    }

    /// Aliases to process, in sorted order.
    pub fn member_aliases(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }
}

/// Lowercased alias with whitespace runs joined by `-`. Path separators also
/// split words, and dot-only segments such as `..` are dropped, so the key is
/// always a single file name.
pub fn fallback_storage_key(alias: &str) -> String {
    alias
        .split(|c: char| c.is_whitespace() || c == '/' || c == '\\')
        .filter(|part| !part.is_empty() && !part.chars().all(|c| c == '.'))
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// A storage key names one file inside the profiles and output directories.
pub fn is_valid_storage_key(key: &str) -> bool {
    !key.trim().is_empty()
        && !key.contains(['/', '\\'])
        && !key.chars().all(|c| c == '.')
}

// ---------------------------------------------------------------------------
// draftcard.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire draftcard.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    source: SourceConfig,
    output: OutputSection,
    #[serde(default)]
    members: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputSection {
    dir: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Http,
}

/// Where the JSON snapshots live.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Directory for `file`, base URL for `http`.
    pub root: String,
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: String,
    #[serde(default = "default_players_path")]
    pub players_path: String,
    #[serde(default = "default_league_path")]
    pub league_path: String,
}

impl SourceConfig {
    /// Relative path of a member's profile document.
    pub fn profile_path(&self, storage_key: &str) -> String {
        let dir = self.profiles_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{storage_key}.json")
        } else {
            format!("{dir}/{storage_key}.json")
        }
    }
}

fn default_profiles_dir() -> String {
    "profiles".into()
}

fn default_players_path() -> String {
    "players.json".into()
}

fn default_league_path() -> String {
    "league_database.json".into()
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/draftcard.toml` relative to
/// the given `base_dir`.
///
/// Does not copy defaults. Prefer `load_config()`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        source: file.source,
        output_dir: PathBuf::from(file.output.dir),
        members: file.members,
    };

    validate(&config)?;

    Ok(config)
}

/// Seed `config/draftcard.toml` from `defaults/` when it is missing.
/// Returns the path written, or `None` if a config was already in place.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let seed = base_dir.join("defaults").join(CONFIG_FILE);
    if !seed.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "{} is missing and there is no {} to seed it from; \
                 run from the project root",
                target.display(),
                seed.display()
            ),
        });
    }

    std::fs::create_dir_all(base_dir.join("config")).map_err(|e| {
        ConfigError::DefaultsCopyError {
            message: format!("failed to create config directory: {e}"),
        }
    })?;
    std::fs::copy(&seed, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {}: {e}", seed.display()),
    })?;

    Ok(Some(target))
}

/// Loads config relative to the current working directory, seeding
/// `config/` from `defaults/` first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_file(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let source = &config.source;
    if source.root.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "source.root".into(),
            message: "must not be empty".into(),
        });
    }

    if source.kind == SourceKind::Http
        && !(source.root.starts_with("http://") || source.root.starts_with("https://"))
    {
        return Err(ConfigError::ValidationError {
            field: "source.root".into(),
            message: format!("must be an http(s) URL when kind = \"http\", got {}", source.root),
        });
    }

    let paths: &[(&str, &str)] = &[
        ("source.players_path", &source.players_path),
        ("source.league_path", &source.league_path),
    ];
    for (name, val) in paths {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "output.dir".into(),
            message: "must not be empty".into(),
        });
    }

    for (alias, key) in &config.members {
        if alias.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "members".into(),
                message: "member alias must not be empty".into(),
            });
        }
        if !is_valid_storage_key(key) {
            return Err(ConfigError::ValidationError {
                field: format!("members.{alias}"),
                message: format!("invalid storage key {key:?}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
