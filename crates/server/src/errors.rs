use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Localized error envelope returned by the API: `{ "message": ... }`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Map a service failure onto the wire taxonomy: validation -> 400 with
    /// the validation message, missing row -> 404, anything else -> 500 with
    /// the operation's localized fallback (details go to the log only).
    pub fn from_service(e: ServiceError, fallback: &'static str) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::Model(ModelError::Validation(msg)) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Db(detail) | ServiceError::Model(ModelError::Db(detail)) => {
                error!(error = %detail, "persistence failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
            ServiceError::Upload(detail) => {
                error!(error = %detail, "upload provider failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "message": self.message }))).into_response()
    }
}
