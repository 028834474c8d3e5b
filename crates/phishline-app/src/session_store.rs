//! Durable session persistence.
//!
//! The login session survives restarts through a small TOML file. The
//! store is a trait so the app can be wired with an in-memory variant
//! for tests and `--ephemeral` runs.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use phishline_core::prelude::*;
use phishline_core::Session;

#[cfg(test)]
use mockall::automock;

const SESSION_FILENAME: &str = "session.toml";
const STATE_DIR: &str = "state";

/// Shared handle passed to the spawned persistence tasks.
pub type SharedSessionStore = Arc<dyn SessionStore>;

/// Durable storage for the login session, injected at startup.
#[cfg_attr(test, automock)]
pub trait SessionStore: Send + Sync {
    /// Read the saved session. A missing or unreadable store yields the
    /// empty (logged-out) session, never an error.
    fn load(&self) -> Session;

    /// Persist the session.
    fn save(&self, session: &Session) -> Result<()>;

    /// Wipe the store completely. Logout semantics: every file in the
    /// store's directory goes, not just the session keys.
    fn clear(&self) -> Result<()>;
}

// --- File-backed store ---

/// Session store backed by `session.toml` in a per-user state directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Store rooted at the standard per-user location
    /// (`<config_dir>/phishline/state/`).
    pub fn standard() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::session_store("Could not determine config directory"))?;
        Ok(Self::new(base.join("phishline").join(STATE_DIR)))
    }

    /// Store rooted at an explicit directory. The directory is created
    /// on first save.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILENAME)
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Session {
        let path = self.session_path();
        if !path.exists() {
            debug!("No saved session at {:?}", path);
            return Session::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(session) => {
                    debug!("Loaded session from {:?}", path);
                    session
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    Session::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                Session::default()
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)
                .map_err(|e| Error::session_store(format!("Failed to create state dir: {}", e)))?;
        }

        let path = self.session_path();
        let temp_path = self.dir.join(".session.toml.tmp");

        let content = toml::to_string_pretty(session)
            .map_err(|e| Error::session_store(format!("Failed to serialize session: {}", e)))?;

        // Stage then rename, so a crash mid-write cannot corrupt the file
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::session_store(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &path)
            .map_err(|e| Error::session_store(format!("Failed to rename temp file: {}", e)))?;

        debug!("Saved session to {:?}", path);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if !self.dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(&self.dir)
            .map_err(|e| Error::session_store(format!("Failed to read state dir: {}", e)))?;
        for entry in entries {
            let entry = entry
                .map_err(|e| Error::session_store(format!("Failed to list state dir: {}", e)))?;
            let path = entry.path();
            if path.is_file() {
                std::fs::remove_file(&path).map_err(|e| {
                    Error::session_store(format!("Failed to remove {:?}: {}", path, e))
                })?;
            }
        }

        info!("Cleared session storage");
        Ok(())
    }
}

// --- In-memory store ---

/// Store for tests and `--ephemeral` runs. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Session {
        self.session.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| Error::session_store("Session store lock poisoned"))?;
        *guard = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| Error::session_store("Session store lock poisoned"))?;
        guard.clear();
        Ok(())
    }
}
