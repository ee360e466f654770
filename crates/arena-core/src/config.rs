//! Configuration management for arena.
//!
//! Loads configuration from ${ARENA_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.arenaplay.gg/api";

pub mod paths {
    //! Path resolution for arena configuration and data directories.
    //!
    //! ARENA_HOME resolution order:
    //! 1. ARENA_HOME environment variable (if set)
    //! 2. ~/.config/arena (default)

    use std::path::PathBuf;

    /// Returns the arena home directory.
    pub fn arena_home() -> PathBuf {
        if let Ok(home) = std::env::var("ARENA_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("arena"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        arena_home().join("config.toml")
    }

    /// Returns the path to the persisted session file.
    pub fn session_path() -> PathBuf {
        arena_home().join("session.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        arena_home().join("logs")
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API base URL.
    pub base_url: String,

    /// Request timeout in seconds (connect and read).
    pub timeout_secs: u64,

    /// Page size for paginated listings.
    pub per_page: u32,

    /// Number of entries fetched for the leaderboard screen.
    pub leaderboard_limit: u32,
}

impl Config {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_PER_PAGE: u32 = 20;
    const DEFAULT_LEADERBOARD_LIMIT: u32 = 50;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resolves the effective base URL with precedence: env > config > default.
    pub fn effective_base_url(&self) -> Result<String> {
        if let Ok(env_url) = std::env::var("ARENA_BASE_URL") {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.trim_end_matches('/').to_string());
            }
        }

        let trimmed = self.base_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }

        Ok(DEFAULT_BASE_URL.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
            per_page: Self::DEFAULT_PER_PAGE,
            leaderboard_limit: Self::DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

/// Validates that a URL is well-formed.
fn validate_url(raw: &str) -> Result<()> {
    url::Url::parse(raw).with_context(|| format!("Invalid base URL: {raw}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    /// Partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "per_page = 50\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.per_page, 50);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    /// Init creates the template file and refuses to overwrite.
    #[test]
    fn test_init_creates_and_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();
        assert!(config_path.exists());

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# Arena Configuration"));

        assert!(Config::init(&config_path).is_err());
    }

    /// Config base_url wins over the default; trailing slash is stripped.
    #[test]
    fn test_effective_base_url_from_config() {
        let config = Config {
            base_url: "https://staging.example.com/api/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.effective_base_url().unwrap(),
            "https://staging.example.com/api"
        );
    }

    /// Malformed configured URL is rejected.
    #[test]
    fn test_effective_base_url_rejects_invalid() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.effective_base_url().is_err());
    }
}
