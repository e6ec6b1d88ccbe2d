//! egui Native Desktop App Module
//!
//! Desktop client for the articles API, built on egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Client configuration (API base URL, session path, timeout)
//! - **`session`** - Session store and its durable storage backends
//! - **`api`** - Blocking HTTP client for the articles API
//! - **`articles`** - Article state controller
//! - **`feedback`** - Status message and busy flag
//! - **`guard`** - Navigation guard for protected views
//! - **`types`** - App view enum
//! - **`state`** - Per-window application state
//! - **`views`** / **`theme`** - Rendering
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── session.rs      - Session store
//! ├── api.rs          - Articles HTTP client
//! ├── articles/       - Article state controller
//! ├── feedback.rs     - Status line state
//! ├── guard.rs        - Navigation guard
//! ├── types.rs        - Shared types
//! ├── state/          - Application state
//! ├── views/          - Login and articles views
//! └── theme/          - Colors
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin articles_app
//! ```

pub mod config;
pub mod session;
pub mod api;
pub mod articles;
pub mod feedback;
pub mod guard;
pub mod types;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use session::{FileStorage, MemoryStorage, Session, SessionStorage, SessionStore};
pub use api::{ArticlesApi, HttpArticlesApi};
pub use articles::ArticleController;
pub use feedback::FeedbackState;
pub use guard::{AuthStatus, NavigationGuard};
pub use types::AppView;
pub use state::AppState;
