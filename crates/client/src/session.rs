//! Persisted session: the last phone number used to log in and the theme.
//!
//! Both values live in one small JSON document. A missing document reads as
//! the default session (no phone, dark theme).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use container_portal_core::{Phone, Theme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when reading or writing the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the session file failed.
    #[error("Session file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The session file is not valid JSON.
    #[error("Session file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Values remembered between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Phone number of the last successful login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Display theme.
    #[serde(default)]
    pub theme: Theme,
}

/// Storage for the [`Session`].
pub trait SessionStore {
    /// Read the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored session cannot be read.
    fn load(&self) -> Result<Session, SessionError>;

    /// Replace the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remember `phone` for automatic login on the next run.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or written.
    fn remember_phone(&self, phone: &Phone) -> Result<(), SessionError> {
        let mut session = self.load()?;
        session.phone = Some(phone.clone());
        self.save(&session)
    }

    /// Forget the remembered phone. The theme is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or written.
    fn forget_phone(&self) -> Result<(), SessionError> {
        let mut session = self.load()?;
        if session.phone.take().is_some() {
            self.save(&session)?;
        }
        Ok(())
    }

    /// Switch to the other theme and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or written.
    fn toggle_theme(&self) -> Result<Theme, SessionError> {
        let mut session = self.load()?;
        session.theme = session.theme.toggled();
        self.save(&session)?;
        Ok(session.theme)
    }
}

/// Session stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Session::default()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&contents).map_err(|source| SessionError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let contents = serde_json::to_string_pretty(session).map_err(|source| {
            SessionError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        // Write then rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }
}

/// Session kept in memory only. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Session>,
}

impl MemorySessionStore {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Session, SessionError> {
        Ok(self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session.clone();
        Ok(())
    }
}
