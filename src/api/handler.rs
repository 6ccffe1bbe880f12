// Authentication handler - thin HTTP orchestration over the identity flow:
// extract the object key, run the match, translate the outcome.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use tracing::info;

use crate::api::error::{build_response, ApiError, ApiResult};
use crate::api::server::AppState;
use crate::identity::AuthOutcome;
use crate::models::AuthResponse;

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    /// Key of the previously stored image to authenticate against. Optional
    /// at the extractor level so its absence becomes a structured error
    /// instead of an extractor rejection.
    #[serde(rename = "objectKey")]
    pub object_key: Option<String>,
}

#[tracing::instrument(skip(state, params))]
pub async fn authenticate_worker_handler(
    State(state): State<AppState>,
    Query(params): Query<AuthQuery>,
) -> ApiResult<Response> {
    // 1. Input validation
    let object_key = params.object_key.ok_or_else(|| {
        ApiError::MalformedInput("missing required query parameter objectKey".to_string())
    })?;

    info!(object_key = %object_key, "Processing authentication request");

    // 2. Run the matching flow
    let outcome = state.authenticator.authenticate(&object_key).await?;

    // 3. Translate the outcome to a response
    match outcome {
        AuthOutcome::Match { worker_id } => Ok(build_response(
            StatusCode::OK,
            AuthResponse::success(worker_id),
        )),
        AuthOutcome::NoMatch => Err(ApiError::NotFound),
    }
}
