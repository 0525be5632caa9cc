use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Feed defaults
// =============================================================================

/// Default datagrepper instance
pub const DEFAULT_BASE_URL: &str = "https://datagrepper.engineering.redhat.com";

/// Topic carrying "index image built" notifications
pub const DEFAULT_TOPIC: &str = "/topic/VirtualTopic.eng.ci.redhat-container-image.index.built";

/// Free-text filter applied to messages
pub const DEFAULT_CONTAINS: &str = "workload-availability";

/// Default time window in seconds (4 weeks)
pub const DEFAULT_DELTA_SECS: u64 = 4 * 7 * 24 * 60 * 60;

/// Largest page size datagrepper accepts
pub const MAX_ROWS_PER_PAGE: u32 = 100;

/// Timeout for a single page request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Feed query configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    pub base_url: String,
    pub topic: String,
    pub contains: String,
    /// Time window in seconds
    pub delta_secs: u64,
    pub rows_per_page: u32,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Skip TLS certificate verification (internal CA)
    pub accept_invalid_certs: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            topic: DEFAULT_TOPIC.to_string(),
            contains: DEFAULT_CONTAINS.to_string(),
            delta_secs: DEFAULT_DELTA_SECS,
            rows_per_page: MAX_ROWS_PER_PAGE,
            timeout_ms: FETCH_TIMEOUT_MS,
            accept_invalid_certs: false,
        }
    }
}

impl FeedConfig {
    /// Page size clamped to what the feed accepts
    pub fn effective_rows_per_page(&self) -> u32 {
        self.rows_per_page.clamp(1, MAX_ROWS_PER_PAGE)
    }

    /// Load configuration from a JSON file, using defaults when it doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config file.
/// Uses $XDG_CONFIG_HOME/find-index-image/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/find-index-image/config.json,
/// or ./find-index-image/config.json if neither is available.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir()).join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("find-index-image")
}
