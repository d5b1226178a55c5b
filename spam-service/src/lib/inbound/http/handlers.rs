use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::Credential;

pub mod check_message;
pub mod current_user;
pub mod list_users;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    /// The single rejection used for every authentication failure.
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(CredentialError::AuthenticationFailed.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ApiResponseBody::new_error(StatusCode::UNAUTHORIZED, msg)),
                )
                    .into_response();
            }
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::AuthenticationFailed => ApiError::unauthorized(),
            CredentialError::DuplicateIdentity(_) => ApiError::Conflict(err.to_string()),
            CredentialError::InvalidUsername(_) | CredentialError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            CredentialError::Password(_)
            | CredentialError::Token(_)
            | CredentialError::DatabaseError(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public view of a credential. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Credential> for UserData {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id.to_string(),
            username: credential.username.as_str().to_string(),
            email: credential.email.as_str().to_string(),
            created_at: credential.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::errors::UsernameError;

    #[test]
    fn test_credential_error_mapping() {
        assert_eq!(
            ApiError::from(CredentialError::AuthenticationFailed),
            ApiError::Unauthorized("Invalid credentials".to_string())
        );
        assert!(matches!(
            ApiError::from(CredentialError::DuplicateIdentity("alice".to_string())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(CredentialError::InvalidUsername(
                UsernameError::InvalidCharacters
            )),
            ApiError::UnprocessableEntity(_)
        ));
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let error = ApiError::from(CredentialError::DatabaseError(
            "password authentication failed for user postgres".to_string(),
        ));
        assert_eq!(
            error,
            ApiError::InternalServerError("Internal server error".to_string())
        );
    }

    #[test]
    fn test_unauthorized_response_challenges_bearer() {
        let response = ApiError::unauthorized().into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
