use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::credential::models::Credential;
use crate::domain::credential::ports::AuthGatewayPort;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated credential in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub credential: Credential,
}

/// Middleware that resolves the bearer token to a stored credential.
///
/// Missing header, bad scheme, bad token and unknown subject all produce the
/// same 401 response.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers())?;

    let credential = state.gateway.authenticate(&token).await?;

    req.extensions_mut().insert(AuthenticatedUser { credential });

    Ok(next.run(req).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_str = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing or unreadable Authorization header");
            ApiError::unauthorized()
        })?;

    let (scheme, token) = auth_str.split_once(' ').ok_or_else(|| {
        tracing::warn!("Malformed Authorization header");
        ApiError::unauthorized()
    })?;

    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        tracing::warn!("Authorization header is not a bearer token");
        return Err(ApiError::unauthorized());
    }

    Ok(token.trim().to_string())
}
