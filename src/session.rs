//! Credential store: the bearer token and username issued at login.
//!
//! Persisted as JSON under the user's home directory so a login survives
//! restarts, like the browser client's local storage did. The session is
//! injected into [`crate::app::App`] rather than read through a global, so
//! tests can run against a throwaway path.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
struct Credentials {
    token: Option<String>,
    username: Option<String>,
}

#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    path: Option<PathBuf>,
}

impl Session {
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".hong_board_session.json")
    }

    /// Load persisted credentials, falling back to a logged-out session when
    /// the file is missing or unreadable.
    pub fn load(path: PathBuf) -> Self {
        let credentials = fs::read_to_string(&path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default();
        Self {
            credentials,
            path: Some(path),
        }
    }

    /// Session that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            credentials: Credentials::default(),
            path: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.username.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.credentials.token.is_some()
    }

    /// Record the credentials issued by a successful login or signup.
    pub fn store(&mut self, token: String, username: String) {
        self.credentials.token = Some(token);
        self.credentials.username = Some(username);
        self.persist();
    }

    /// Explicit logout. This is the only place credentials are destroyed; a
    /// 401 from the backend does not clear them.
    pub fn clear(&mut self) {
        self.credentials = Credentials::default();
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.path else { return };
        match serde_json::to_string_pretty(&self.credentials) {
            Ok(data) => {
                if let Err(e) = fs::write(path, data) {
                    tracing::warn!(path = %path.display(), %e, "failed to persist session");
                }
            }
            Err(e) => tracing::warn!(%e, "failed to serialize session"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_session_starts_logged_out() {
        let session = Session::in_memory();
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
        assert_eq!(session.username(), None);
    }

    #[test]
    fn store_and_clear_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::load(path.clone());
        session.store("tok".to_string(), "hong".to_string());
        assert!(session.is_logged_in());

        let reloaded = Session::load(path.clone());
        assert_eq!(reloaded.token(), Some("tok"));
        assert_eq!(reloaded.username(), Some("hong"));

        let mut session = reloaded;
        session.clear();
        let reloaded = Session::load(path);
        assert!(!reloaded.is_logged_in());
    }

    #[test]
    fn missing_file_loads_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load(dir.path().join("nope.json"));
        assert!(!session.is_logged_in());
    }
}
