//! Shared Module
//!
//! Platform-agnostic types used by the client core and the desktop shell:
//! article data, REST wire types, configuration and the error taxonomy.

/// Article data structures and the form validation policy
pub mod article;

/// REST request/response bodies
pub mod api;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use article::{Article, ArticleFields, ArticleForm, ArticleId, Topic};
pub use error::ClientError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
