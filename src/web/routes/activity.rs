use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::SignupError;
use crate::services::activities_service::ActivityDirectory;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

pub async fn activity_signup_handler(
    State(directory): State<ActivityDirectory>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Path(activity_name) = path.map_err(|e| invalid_request(e.body_text()))?;
    let Query(query) = query.map_err(|e| invalid_request(e.body_text()))?;
    let email = query.email.unwrap_or_default();
    directory
        .sign_up(&activity_name, &email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(error_response)
}

pub async fn activity_unregister_handler(
    State(directory): State<ActivityDirectory>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Path(activity_name) = path.map_err(|e| invalid_request(e.body_text()))?;
    let Query(query) = query.map_err(|e| invalid_request(e.body_text()))?;
    let email = query.email.unwrap_or_default();
    directory
        .unregister(&activity_name, &email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(error_response)
}

// Extractor rejections are plain text by default; route them through the
// same `{"detail": ...}` body as every other error.
fn invalid_request(detail: String) -> (StatusCode, Json<Value>) {
    warn!(detail = %detail, "malformed participant request");
    error_response(SignupError::InvalidRequest(detail))
}

fn error_response(err: SignupError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        SignupError::NotFound | SignupError::NotRegistered => StatusCode::NOT_FOUND,
        SignupError::AlreadyRegistered
        | SignupError::CapacityExceeded
        | SignupError::MissingEmail
        | SignupError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}
