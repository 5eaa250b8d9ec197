//! # Session Persistence
//!
//! The hosted identity provider owns the real session; this module keeps the
//! local credential record at `~/.lounge/session.json` so the client stays
//! signed in between runs.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety. Clearing the session is the local half of sign-out — the gateway
//! call is the other half, and neither waits on the other.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// The locally stored credential record.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StoredSession {
    pub id: String,
    pub account: String,
    pub token: String,
    pub created_at: i64,
}

impl StoredSession {
    /// Create a fresh session record for `account` with the given token.
    pub fn new(account: &str, token: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            account: account.to_string(),
            token: token.to_string(),
            created_at: Utc::now().timestamp(),
        }
    }
}

/// Returns `~/.lounge/`, creating it if needed.
fn lounge_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".lounge");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn session_path() -> io::Result<PathBuf> {
    Ok(lounge_dir()?.join("session.json"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Load the stored session, if any. A missing file is `Ok(None)`.
pub fn load_session() -> io::Result<Option<StoredSession>> {
    let path = session_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(&path)?;
    let session: StoredSession =
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    debug!("Loaded session for account {}", session.account);
    Ok(Some(session))
}

/// Persist the session record.
pub fn save_session(session: &StoredSession) -> io::Result<()> {
    let path = session_path()?;
    atomic_write_json(&path, session)?;
    debug!("Session saved: {}", session.id);
    Ok(())
}

/// Remove the local session record. Removing a missing file is not an error.
pub fn clear_session() -> io::Result<()> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path)?;
        debug!("Session cleared");
    }
    Ok(())
}

/// Best-effort clear used on the sign-out path, where a failure must not
/// block the redirect to `/login`.
pub fn clear_session_logged() {
    if let Err(e) = clear_session() {
        warn!("Failed to clear local session: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_uuid_and_timestamp() {
        let session = StoredSession::new("player-one", "lg-token");
        assert_eq!(session.account, "player-one");
        assert_eq!(session.token, "lg-token");
        assert!(!session.id.is_empty());
        assert!(session.created_at > 0);
        // v4 UUIDs are 36 chars with hyphens
        assert_eq!(session.id.len(), 36);
    }

    #[test]
    fn test_session_json_round_trip() {
        let session = StoredSession::new("player-one", "lg-token");
        let json = serde_json::to_string(&session).unwrap();
        let back: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, session.id);
        assert_eq!(back.account, session.account);
        assert_eq!(back.token, session.token);
        assert_eq!(back.created_at, session.created_at);
    }

    #[test]
    fn test_distinct_sessions_get_distinct_ids() {
        let a = StoredSession::new("a", "t");
        let b = StoredSession::new("b", "t");
        assert_ne!(a.id, b.id);
    }
}
