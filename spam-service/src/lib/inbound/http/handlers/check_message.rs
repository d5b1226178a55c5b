use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;

/// Verdict returned until a classifier exists.
pub const PLACEHOLDER_VERDICT: &str = "received (classification not implemented)";

/// Accept a message for spam checking and echo it back.
pub async fn check_message(
    Json(body): Json<CheckMessageRequest>,
) -> Result<ApiSuccess<CheckMessageResponseData>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "Message must not be empty".to_string(),
        ));
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CheckMessageResponseData {
            message: body.message,
            result: PLACEHOLDER_VERDICT.to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckMessageRequest {
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMessageResponseData {
    pub message: String,
    pub result: String,
}
