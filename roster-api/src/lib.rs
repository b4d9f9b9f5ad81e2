//! # Roster API Server
//!
//! HTTP surface for the roster service, consumed by the static front-end.
//!
//! ## Endpoints
//!
//! - `GET /read-file` - List formatted record rows
//! - `POST /sync-data` - Rebuild the cache mirror from the remote file
//! - `POST /add-entry` - Append an entry
//! - `POST /edit-entry` - Replace the entry at an index
//! - `POST /delete-entry` - Remove the entry at an index
//! - `POST /save-notifier-token` - Save the bot token
//! - `POST /set-webhook` - Register the bot webhook
//! - `POST /telegram-webhook` - Inbound bot update stub
//!
//! ## Example
//!
//! ```rust,ignore
//! use roster_api::{ApiServer, ApiConfig};
//!
//! let config = ApiConfig::from_env();
//! let server = ApiServer::new(config)?;
//! server.run(([0, 0, 0, 0], 3001)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use roster_core::error::Result;

/// API server for the roster service.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            state: Arc::new(AppState::new(config)?),
        })
    }

    /// Creates the router with all routes configured.
    ///
    /// The front-end is served from another origin, so every response
    /// carries permissive CORS headers and OPTIONS preflights
    /// short-circuit with an empty 200.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("Roster API server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
