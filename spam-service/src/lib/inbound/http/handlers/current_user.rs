use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn current_user(Extension(user): Extension<AuthenticatedUser>) -> ApiSuccess<UserData> {
    ApiSuccess::new(StatusCode::OK, (&user.credential).into())
}
