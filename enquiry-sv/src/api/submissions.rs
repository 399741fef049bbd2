//! Submission intake and dashboard listing endpoints

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use enquiry_common::auth::parse_basic_auth;
use enquiry_common::model::{Submission, SubmissionRequest};
use enquiry_common::Error;

use crate::AppState;

/// POST /api/submissions
///
/// 201 `{success, id}` on success (id null in degraded mode), 400 on
/// validation failure, 409 when the same five-field key was seen before.
pub async fn create_submission(
    State(state): State<AppState>,
    Json(request): Json<SubmissionRequest>,
) -> Result<impl IntoResponse, Error> {
    let id = state.service.submit(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "id": id,
        })),
    ))
}

/// GET /api/submissions
///
/// Requires `Authorization: Basic base64(user:pass)`. Returns all stored
/// submissions, newest first.
pub async fn list_submissions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Submission>>, Error> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let (username, password) = parse_basic_auth(header_value).ok_or(Error::Auth)?;

    let submissions = state.service.list(&username, &password).await?;
    Ok(Json(submissions))
}
