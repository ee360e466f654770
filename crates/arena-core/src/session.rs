//! Session token storage and retrieval.
//!
//! Stores the bearer token in `<home>/session.json` with restricted
//! permissions (0600). The token is read into an explicit [`Session`] value
//! passed to the API client at construction; there is no process-wide
//! credential global. Requests already built keep the token they captured.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Credentials attached to outgoing requests.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A logged-out session; requests are sent without a bearer header.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Persisted session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// On-disk session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Store at the default location under the arena home directory.
    pub fn new() -> Self {
        Self {
            path: paths::session_path(),
        }
    }

    /// Store at an explicit path (tests, alternate homes).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the persisted session. Absent file means logged out.
    pub fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {}", self.path.display()))?;

        let stored = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", self.path.display()))?;
        Ok(Some(stored))
    }

    /// Saves the session with restricted permissions (0600).
    ///
    /// Saving is idempotent; replacing the token does not affect requests
    /// already under construction.
    pub fn save(&self, stored: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(stored).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the persisted session (logout).
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }

    /// Builds the [`Session`] for client construction.
    ///
    /// An unreadable or corrupt session file degrades to logged-out rather
    /// than failing startup.
    pub fn session(&self) -> Session {
        match self.load() {
            Ok(Some(stored)) => Session::authenticated(stored.token),
            Ok(None) => Session::anonymous(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file: {e:#}");
                Session::anonymous()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    /// Session round-trips through the store.
    #[test]
    fn test_session_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        store
            .save(&StoredSession {
                token: "tok_123".to_string(),
                user_id: Some("7".to_string()),
                username: Some("kiran".to_string()),
            })
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "tok_123");
        assert_eq!(loaded.username.as_deref(), Some("kiran"));

        let session = store.session();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok_123"));
    }

    /// Absent file means logged out.
    #[test]
    fn test_session_store_absent_is_logged_out() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());
        assert!(!store.session().is_authenticated());
    }

    /// Clear logs out; clearing twice is fine.
    #[test]
    fn test_session_store_clear() {
        let dir = tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        store
            .save(&StoredSession {
                token: "tok".to_string(),
                user_id: None,
                username: None,
            })
            .unwrap();
        store.clear().unwrap();
        assert!(!store.session().is_authenticated());
        store.clear().unwrap();
    }

    /// Empty token counts as logged out.
    #[test]
    fn test_empty_token_is_anonymous() {
        let session = Session::authenticated("");
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }
}
