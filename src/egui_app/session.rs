//! Session Store
//!
//! Holds the authentication token and username for the running client and
//! mirrors them into durable storage so a restart keeps the user logged in.
//!
//! The store is a cheap, cloneable handle. The controller, the API gateway
//! and the navigation guard all receive a clone at startup instead of
//! reaching for process-wide globals.
//!
//! ```rust
//! use articles_desk::egui_app::session::{MemoryStorage, SessionStore};
//!
//! let store = SessionStore::open(MemoryStorage::new());
//! assert!(store.current_token().is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::egui_app::api::ArticlesApi;
use crate::shared::api::LoginRequest;
use crate::shared::error::ClientError;

/// Persisted authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt session file '{path}': {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable key-value backend for the session
pub trait SessionStorage: Send + Sync {
    /// Read the stored session; an empty store yields `Session::default()`
    fn load(&self) -> Result<Session, StorageError>;

    fn save(&self, session: &Session) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}

/// JSON document on disk holding the `token` and `username` entries
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Session, StorageError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(session).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// Non-durable backend, used when no session path is configured and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    saved: Mutex<Session>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated as if a previous run had logged in
    pub fn with_session(session: Session) -> Self {
        Self {
            saved: Mutex::new(session),
        }
    }

    fn saved(&self) -> MutexGuard<'_, Session> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Session, StorageError> {
        Ok(self.saved().clone())
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        *self.saved() = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.saved() = Session::default();
        Ok(())
    }
}

/// Shared handle to the current session and its storage backend.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Open the store, loading whatever the backend persisted.
    ///
    /// Unreadable storage is logged and treated as logged out.
    pub fn open(storage: impl SessionStorage + 'static) -> Self {
        let session = match storage.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Discarding unreadable session: {}", e);
                Session::default()
            }
        };
        if let Some(ref username) = session.username {
            tracing::info!("Restored session for {}", username);
        }
        Self {
            inner: Arc::new(RwLock::new(session)),
            storage: Arc::new(storage),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.read().clone()
    }

    pub fn current_token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn current_username(&self) -> Option<String> {
        self.read().username.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Replace the session and persist it.
    ///
    /// The in-memory session is updated even if persisting fails.
    pub fn set(&self, session: Session) {
        if let Err(e) = self.storage.save(&session) {
            tracing::error!("Failed to persist session: {}", e);
        }
        *self.write() = session;
    }

    /// Forget the session in memory and in storage
    pub fn clear(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::error!("Failed to clear persisted session: {}", e);
        }
        *self.write() = Session::default();
    }

    /// Exchange credentials for a token and persist the new session.
    ///
    /// On failure any prior session is left untouched.
    pub fn login(
        &self,
        api: &dyn ArticlesApi,
        username: &str,
        password: &str,
    ) -> Result<Session, ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = api.login(&request)?;
        let session = Session {
            token: Some(response.token),
            username: Some(username.to_string()),
        };
        self.set(session.clone());
        tracing::info!("Logged in as {}", username);
        Ok(session)
    }

    /// Drop the session. Calling this while logged out is harmless.
    pub fn logout(&self) {
        if self.is_authenticated() {
            tracing::info!("Logging out {}", self.current_username().unwrap_or_default());
        }
        self.clear();
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("username", &self.current_username())
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
