//! Error types for the roster service.
//!
//! This module provides the error hierarchy using `thiserror`. All errors
//! include context and are designed to be actionable at the HTTP layer.

use thiserror::Error;

/// Result type alias using `RosterError`.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Main error type for all roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    // ═══════════════════════════════════════════════════════════════════════════
    // REMOTE STORE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Network or auth failure reaching the remote store.
    #[error("Remote store unavailable: {reason}")]
    RemoteUnavailable {
        /// Transport or provider failure description.
        reason: String,
    },

    /// The durable file does not exist in the remote repository.
    #[error("Remote file not found: {0}")]
    NotFound(String),

    /// The version token was stale at write time (optimistic concurrency).
    /// Not retried automatically; the caller must re-read.
    #[error("Remote write conflict: version token is stale")]
    Conflict,

    // ═══════════════════════════════════════════════════════════════════════════
    // COLLECTION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Index is past the end of the record collection.
    #[error("Invalid index {index}: collection has {len} entries")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// Current collection length.
        len: usize,
    },

    /// Input validation failed (missing or empty required field).
    #[error("Validation error: {0}")]
    ValidationError(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // NOTIFICATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The messaging provider rejected or failed a notification call.
    /// Swallowed on the side channel; surfaced only by configuration
    /// operations such as webhook registration.
    #[error("Notification failed: {0}")]
    NotificationFailed(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // AMBIENT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RosterError {
    /// Convenience constructor for `RemoteUnavailable`.
    pub fn remote(reason: impl Into<String>) -> Self {
        RosterError::RemoteUnavailable {
            reason: reason.into(),
        }
    }

    /// Returns true if the caller caused this error (maps to HTTP 4xx).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            RosterError::InvalidIndex { .. } | RosterError::ValidationError(_)
        )
    }

    /// Returns true if retrying the same operation could succeed.
    ///
    /// `Conflict` is deliberately excluded: a stale version token requires
    /// a fresh read before the write can be retried.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::RemoteUnavailable { .. } | RosterError::NotificationFailed(_)
        )
    }
}
