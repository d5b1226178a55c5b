use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::credential::ports::AuthGatewayPort;
use crate::inbound::http::router::AppState;

pub async fn list_users(State(state): State<AppState>) -> Result<ApiSuccess<Vec<UserData>>, ApiError> {
    let credentials = state.gateway.list_credentials().await?;
    tracing::info!(count = credentials.len(), "Users listed");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        credentials.iter().map(UserData::from).collect(),
    ))
}
