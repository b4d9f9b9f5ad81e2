//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use roster_core::error::RosterError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// 4xx body: the client is told what to fix.
#[derive(Serialize)]
struct ClientErrorBody {
    message: String,
}

/// 5xx body: the failure envelope the front-end keys on.
#[derive(Serialize)]
struct ServerErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            (self.status, Json(ClientErrorBody { message: self.message })).into_response()
        } else {
            (
                self.status,
                Json(ServerErrorBody {
                    success: false,
                    message: self.message,
                }),
            )
                .into_response()
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match &err {
            RosterError::InvalidIndex { .. } => ApiError::bad_request("Invalid index."),
            RosterError::ValidationError(_) => ApiError::bad_request(err.to_string()),
            _ => {
                tracing::error!(error = %err, "Operation failed");
                ApiError::internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_maps_to_400() {
        let api_err = ApiError::from(RosterError::InvalidIndex { index: 9, len: 2 });
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.message, "Invalid index.");
    }

    #[test]
    fn test_remote_failure_maps_to_500() {
        let api_err = ApiError::from(RosterError::remote("boom"));
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api_err.message.contains("boom"));
    }

    #[test]
    fn test_conflict_maps_to_500() {
        let api_err = ApiError::from(RosterError::Conflict);
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
