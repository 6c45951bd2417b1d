use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::error::ApiError;
use crate::services::AuthError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// POST /api/users/login - verify credentials and issue a bearer token.
///
/// The 400/401 bodies are plain text rather than the usual JSON error shape;
/// browser clients of the complaint form display them verbatim.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let (username, password) = match (payload.username, payload.password) {
        (Some(u), Some(p)) => (u, p),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                "Username and password are required.",
            )
                .into_response()
        }
    };

    let identity = match state.auth.login(&username, &password).await {
        Ok(identity) => identity,
        Err(AuthError::InvalidCredentials) => {
            return (StatusCode::UNAUTHORIZED, "Invalid username or password.").into_response()
        }
        Err(e) => return ApiError::from(e).into_response(),
    };

    let claims = Claims::new(identity.username.clone(), identity.role.clone());
    let token = match generate_jwt(&claims) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("token generation failed: {}", e);
            return ApiError::internal_server_error("Failed to issue token").into_response();
        }
    };

    Json(json!({
        "success": true,
        "username": identity.username,
        "role": identity.role,
        "token": token,
    }))
    .into_response()
}

/// POST /api/users/register - create an account with a hashed password.
/// Role defaults to STUDENT when omitted.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (username, password) = match (payload.username, payload.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(ApiError::bad_request("Username and password are required.")),
    };
    let role = payload.role.unwrap_or_else(|| "STUDENT".to_string());

    let user = state.auth.register(&username, &password, &role).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "username": user.username,
            "role": user.role,
        })),
    ))
}
