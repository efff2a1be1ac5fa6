use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::{requests::CreateUserRequest, responses::UserProfile};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::{User, ROLE_EVENT_ADMIN, ROLE_MAIN_ADMIN};
use crate::domain::services::access::require_main_admin;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_main_admin(&actor)?;

    let (Some(email), Some(password), Some(role)) = (payload.email, payload.password, payload.role)
    else {
        return Err(AppError::Validation("email, password, role required".into()));
    };
    let email = email.trim().to_string();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation("email, password, role required".into()));
    }
    if role != ROLE_MAIN_ADMIN && role != ROLE_EVENT_ADMIN {
        return Err(AppError::Validation("role must be main_admin or event_admin".into()));
    }

    if state.user_repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Email already exists".into()));
    }

    let hash = state.auth_service.hash_password(&password)?;
    let user = User::new(email, hash, role);
    let created = state.user_repo.create(&user).await?;

    info!("Created user {} with role {}", created.id, created.role);

    Ok((StatusCode::CREATED, Json(UserProfile::from(&created))))
}
