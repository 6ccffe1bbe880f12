use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::clients::ClientError;
use crate::models::AuthResponse;

#[derive(Debug)]
pub enum ApiError {
    /// Required input was missing or unreadable.
    MalformedInput(String),
    /// The submitted image contained no detectable face.
    NoFaceDetected,
    /// Search succeeded but no candidate resolved to a registered worker.
    NotFound,
    /// Any other collaborator failure; carries the error text for diagnostics.
    Upstream(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
            ApiError::NoFaceDetected => write!(f, "No face detected"),
            ApiError::NotFound => write!(f, "No match found"),
            ApiError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NoFaceDetected => ApiError::NoFaceDetected,
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "no_match_found".to_string()),
            ApiError::NoFaceDetected => (StatusCode::BAD_GATEWAY, "no_face_detected".to_string()),
            ApiError::MalformedInput(msg) | ApiError::Upstream(msg) => {
                (StatusCode::BAD_GATEWAY, msg)
            }
        };

        build_response(status, AuthResponse::failure(message))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Assemble a JSON response with the headers every reply carries: the
/// endpoint is called from browser clients, so the allow-origin header goes
/// on errors as well as successes.
pub fn build_response(status: StatusCode, body: AuthResponse) -> Response {
    (
        status,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(body),
    )
        .into_response()
}
