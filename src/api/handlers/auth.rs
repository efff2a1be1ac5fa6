use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::{requests::LoginRequest, responses::{AuthResponse, UserProfile}};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(AppError::Validation("Email and password required".into()));
    };

    // Unknown email and wrong password fail identically so the endpoint
    // cannot be used to enumerate accounts.
    let user = state
        .user_repo
        .find_by_email(&email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    state.auth_service.verify_password(&password, &user.password_hash)?;

    let token = state.auth_service.issue_token(&user)?;

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}
