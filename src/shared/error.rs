//! Shared Error Types
//!
//! This module defines the error taxonomy used by every client operation.
//! Each failure is caught at the operation boundary and turned into a single
//! feedback string; none of these errors ever terminate the application.
//!
//! # Error Categories
//!
//! - `Validation` - local form checks, blocks submission before any call
//! - `Precondition` - no token present, blocks the call
//! - `Auth` - server rejected the credentials or the token
//! - `Network` - transport failure or any other non-success response
//! - `NotFound` - update/delete target unknown to the server
//!
//! # Usage
//!
//! ```rust
//! use articles_desk::shared::error::ClientError;
//!
//! let error = ClientError::validation("title", "Title must be at least 3 characters");
//! assert!(error.server_message().is_none());
//! ```
use thiserror::Error;

/// Errors surfaced by the session store, the API gateway and the controller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Form values failed the local validation policy
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// No token is stored, so no request was sent
    #[error("No token found. Please log in again.")]
    Precondition,

    /// The server rejected the credentials or the token (HTTP 401)
    #[error("Unauthorized: {}", .message.as_deref().unwrap_or("no message"))]
    Auth {
        /// Message from the response body, if any
        message: Option<String>,
    },

    /// The server does not know the requested article (HTTP 404)
    #[error("Not found: {}", .message.as_deref().unwrap_or("no message"))]
    NotFound {
        /// Message from the response body, if any
        message: Option<String>,
    },

    /// Transport failure, undecodable body, or any other non-success status
    #[error("Network error: {detail}")]
    Network {
        /// HTTP status, absent for transport failures
        status: Option<u16>,
        /// Message from the response body, if any
        message: Option<String>,
        /// Diagnostic detail for logs
        detail: String,
    },
}

impl ClientError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a network error for a request that never produced a response
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: None,
            detail: detail.into(),
        }
    }

    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Auth { message },
            404 => Self::NotFound { message },
            _ => Self::Network {
                status: Some(status),
                detail: format!(
                    "HTTP {} - {}",
                    status,
                    message.as_deref().unwrap_or("no message")
                ),
                message,
            },
        }
    }

    /// Message provided by the server, if the failure came with one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Auth { message } | Self::NotFound { message } | Self::Network { message, .. } => {
                message.as_deref()
            }
            Self::Validation { .. } | Self::Precondition => None,
        }
    }

    /// Whether this failure must end the session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Text to show the user: the server message when present, else `fallback`.
    ///
    /// Local failures carry their own text and ignore the fallback.
    pub fn feedback(&self, fallback: &str) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Precondition => self.to_string(),
            _ => self
                .server_message()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(fallback)
                .to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), None);
        }
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(format!("JSON error: {}", err))
    }
}
