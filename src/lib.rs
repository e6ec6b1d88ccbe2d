//! Articles Desk - Main Library
//!
//! A native desktop client for a remote articles API: log in, list, create,
//! edit and delete articles, with the session kept across restarts.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Article data and the form validation policy
//!   - REST wire types
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session store with file-backed persistence
//!   - Blocking HTTP client for the articles API
//!   - Article state controller, feedback line and navigation guard
//!   - Login and articles views
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use articles_desk::egui_app::{ArticleController, Config, HttpArticlesApi, MemoryStorage, SessionStore};
//!
//! let config = Config::new();
//! let session = SessionStore::open(MemoryStorage::new());
//! let api = HttpArticlesApi::new(config, session.clone()).unwrap();
//! let mut controller = ArticleController::new(Arc::new(api), session);
//!
//! controller.login("bob", "pw").unwrap();
//! controller.block_until_idle();
//! controller.refresh();
//! controller.block_until_idle();
//! println!("{}", controller.message());
//! ```
//!
//! # Threading
//!
//! Requests run on worker threads and report back over a channel. All state
//! changes are applied on the UI thread by `ArticleController::poll`.
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::error::ClientError` for every request outcome
//! - `shared::config::ConfigError` and `egui_app::session::StorageError` for
//!   local configuration and storage

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
