//! DTOs for API requests and responses.
//!
//! Required request fields are `Option`s so that a missing field surfaces
//! as a 400 with the documented message instead of a deserialization
//! rejection.

use serde::{Deserialize, Serialize};

/// Response for the row listing.
#[derive(Debug, Serialize)]
pub struct ReadFileResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Formatted record lines, in collection order.
    pub rows: Vec<String>,
}

/// Generic success envelope for mutations.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

/// Bare-message response used by the notifier configuration endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Request to save the notifier bot token.
#[derive(Debug, Deserialize)]
pub struct SaveTokenRequest {
    /// The bot token.
    pub token: Option<String>,
}

/// Request to add an entry.
#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    /// Entry name.
    pub name: Option<String>,
    /// Expiration date, `YYYY-MM-DD`.
    pub expiration: Option<String>,
    /// IP address.
    pub ip: Option<String>,
}

/// Request to edit the entry at an index.
#[derive(Debug, Deserialize)]
pub struct EditEntryRequest {
    /// Position of the entry to replace.
    pub index: Option<usize>,
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement expiration date.
    pub expiration: Option<String>,
    /// Replacement IP address.
    pub ip: Option<String>,
}

/// Request to delete the entry at an index.
#[derive(Debug, Deserialize)]
pub struct DeleteEntryRequest {
    /// Position of the entry to remove.
    pub index: Option<usize>,
}
