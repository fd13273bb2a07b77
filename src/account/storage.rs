//! Durable session storage.
//!
//! Persists the two entries `auth_token` and `auth_user` (the user serialized
//! as a JSON string) in a single file. Both are written together and cleared
//! together; a corrupt or partial read is treated as "no session" and the
//! entry is wiped. Writes go through a temp file + rename so a crash never
//! leaves a half-written session behind.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::models::AuthSession;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedSession {
    auth_token: Option<String>,
    /// User profile, serialized as a JSON string (mirrors a key-value store
    /// holding an opaque string per entry).
    auth_user: Option<String>,
}

pub struct SessionStorage {
    file_path: PathBuf,
}

impl SessionStorage {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Reads the persisted session. Any corruption (unreadable file, missing
    /// entry, unparseable user) wipes the storage and yields `None`.
    pub fn load(&self) -> Option<AuthSession> {
        if !self.file_path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(error = %e, "failed to read session file, treating as no session");
                return None;
            }
        };

        let persisted: PersistedSession = match serde_json::from_str(&contents) {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!(error = %e, "session file corrupted, wiping");
                self.clear();
                return None;
            }
        };

        let (token, user_json) = match (persisted.auth_token, persisted.auth_user) {
            (Some(token), Some(user_json)) if !token.is_empty() => (token, user_json),
            _ => {
                warn!("session file incomplete, wiping");
                self.clear();
                return None;
            }
        };

        match serde_json::from_str(&user_json) {
            Ok(user) => {
                debug!("restored persisted session");
                Some(AuthSession { token, user })
            }
            Err(e) => {
                warn!(error = %e, "persisted user corrupted, wiping");
                self.clear();
                None
            }
        }
    }

    /// Persists token and user together, atomically.
    pub fn save(&self, session: &AuthSession) -> io::Result<()> {
        let persisted = PersistedSession {
            auth_token: Some(session.token.clone()),
            auth_user: Some(
                serde_json::to_string(&session.user)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            ),
        };
        let json = serde_json::to_string_pretty(&persisted)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.file_path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.file_path)?;

        debug!("session persisted");
        Ok(())
    }

    /// Removes both entries. Failure to delete is logged, never surfaced:
    /// logout must always succeed.
    pub fn clear(&self) {
        if self.file_path.exists() {
            if let Err(e) = fs::remove_file(&self.file_path) {
                warn!(error = %e, "failed to clear session file");
            }
        }
    }
}
