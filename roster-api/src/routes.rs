//! API route configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Collection
        .route("/read-file", get(handlers::read_file))
        .route("/sync-data", post(handlers::sync_data))
        .route("/add-entry", post(handlers::add_entry))
        .route("/edit-entry", post(handlers::edit_entry))
        .route("/delete-entry", post(handlers::delete_entry))
        // Notification channel
        .route("/save-notifier-token", post(handlers::save_notifier_token))
        .route("/set-webhook", post(handlers::set_webhook))
        .route("/telegram-webhook", post(handlers::telegram_webhook))
        .with_state(state)
}
