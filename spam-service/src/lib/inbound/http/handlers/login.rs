use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::credential::ports::AuthGatewayPort;
use crate::inbound::http::router::AppState;

/// Exchange a username/password pair for a bearer token.
///
/// The body follows the OAuth2 token response shape rather than the
/// `{status_code, data}` envelope used elsewhere.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseBody>, ApiError> {
    let result = state.gateway.login(&body.username, &body.password).await?;

    Ok(Json(LoginResponseBody {
        access_token: result.access_token,
        token_type: TOKEN_TYPE,
    }))
}

const TOKEN_TYPE: &str = "bearer";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseBody {
    pub access_token: String,
    pub token_type: &'static str,
}
