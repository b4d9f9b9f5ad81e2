//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use tracing::info;

use roster_core::types::Entry;

use crate::dto::*;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

fn required(field: Option<String>) -> std::result::Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::bad_request("All fields are required.")),
    }
}

/// GET /read-file
pub async fn read_file(State(state): State<Arc<AppState>>) -> Result<Json<ReadFileResponse>> {
    let rows = state
        .service
        .read()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to load data: {e}")))?;

    Ok(Json(ReadFileResponse {
        success: true,
        rows,
    }))
}

/// POST /save-notifier-token
pub async fn save_notifier_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveTokenRequest>,
) -> Result<Json<MessageResponse>> {
    let token = match req.token {
        Some(token) if !token.trim().is_empty() => token,
        _ => return Err(ApiError::bad_request("Token is required.")),
    };

    state.notifier.set_token(token);
    info!("Notifier token saved");

    Ok(Json(MessageResponse {
        message: "Token saved successfully.".into(),
    }))
}

/// POST /set-webhook
pub async fn set_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>> {
    if state.notifier.token().is_none() {
        return Err(ApiError::bad_request("Notifier token not configured."));
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::bad_request("Missing Host header."))?;
    let webhook_url = format!("https://{host}/telegram-webhook");

    state
        .notifier
        .set_webhook(&webhook_url)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to set webhook: {e}")))?;

    Ok(Json(MessageResponse {
        message: "Webhook set successfully.".into(),
    }))
}

/// POST /telegram-webhook
///
/// Inbound bot updates are acknowledged and otherwise ignored.
pub async fn telegram_webhook() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Webhook received.".into(),
    })
}

/// POST /sync-data
pub async fn sync_data(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>> {
    state
        .service
        .resync()
        .await
        .map_err(|e| ApiError::internal(format!("Sync failed: {e}")))?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Synchronization successful.".into(),
    }))
}

/// POST /add-entry
pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddEntryRequest>,
) -> Result<Json<StatusResponse>> {
    let entry = Entry::new(
        required(req.name)?,
        required(req.expiration)?,
        required(req.ip)?,
    );

    state.service.add(entry).await.map_err(ApiError::from)?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Entry added successfully.".into(),
    }))
}

/// POST /edit-entry
pub async fn edit_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EditEntryRequest>,
) -> Result<Json<StatusResponse>> {
    let index = req.index.ok_or_else(|| ApiError::bad_request("Invalid index."))?;
    let entry = Entry::new(
        required(req.name)?,
        required(req.expiration)?,
        required(req.ip)?,
    );

    state.service.edit(index, entry).await.map_err(ApiError::from)?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Entry updated successfully.".into(),
    }))
}

/// POST /delete-entry
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteEntryRequest>,
) -> Result<Json<StatusResponse>> {
    let index = req.index.ok_or_else(|| ApiError::bad_request("Invalid index."))?;

    state.service.delete(index).await.map_err(ApiError::from)?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Entry deleted successfully.".into(),
    }))
}
