//! Authentication route handlers.
//!
//! Login and signup resolve to boolean outcomes in a 200 response; only
//! validation failures and unauthenticated access produce error statuses.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{Identity, ProfileUpdate, SignupDraft};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Outcome of a login or signup attempt.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
}

/// Wrapper for responses that carry the current identity.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: Identity,
}

/// Handle a login attempt.
///
/// Bad credentials are an ordinary `{"success": false}` outcome, not an
/// error status; the caller shows a retry message.
#[instrument(skip(state, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Json<AuthResponse> {
    let success = state.session().login(&request.email, &request.password).await;

    Json(AuthResponse {
        success,
        user: state.session().current(),
    })
}

/// Handle a signup attempt.
///
/// A duplicate email is an ordinary `{"success": false}` outcome; a draft
/// that fails validation is a 400.
#[instrument(skip(state, draft), fields(email = %draft.email))]
pub async fn signup(
    State(state): State<AppState>,
    Json(draft): Json<SignupDraft>,
) -> Result<Json<AuthResponse>> {
    let email = draft.validate()?;
    let success = state
        .session()
        .signup(&draft.name, email, &draft.password, draft.role)
        .await;

    Ok(Json(AuthResponse {
        success,
        user: state.session().current(),
    }))
}

/// Log out the current identity.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Json<AuthResponse> {
    state.session().logout();
    Json(AuthResponse {
        success: true,
        user: None,
    })
}

/// Return the current identity, or 401 when nobody is logged in.
#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>) -> Result<Json<UserResponse>> {
    state
        .session()
        .current()
        .map(|user| Json(UserResponse { user }))
        .ok_or_else(|| AppError::Unauthorized("not logged in".to_string()))
}

/// Merge a profile update into the current identity.
#[instrument(skip(state, update))]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserResponse>> {
    state
        .session()
        .update_profile(update)
        .map(|user| Json(UserResponse { user }))
        .ok_or_else(|| AppError::Unauthorized("not logged in".to_string()))
}
