use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use smart_doh_domain::DomainError;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, body) = match &self.0 {
            DomainError::InvalidInput(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request", "message": message }),
            ),

            DomainError::DecodeError(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Malformed DNS message", "message": message }),
            ),

            DomainError::UpstreamUnavailable { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "DNS query failed",
                    "message": message,
                    "suggestion": "Retry shortly or check upstream health at /status",
                }),
            ),

            DomainError::ConfigError(_) => {
                error!(error = %message, "Configuration error surfaced to a request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
