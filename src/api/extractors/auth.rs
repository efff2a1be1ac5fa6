use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, StatusCode},
};
use crate::domain::models::auth::Claims;
use crate::state::AppState;
use std::sync::Arc;
use tracing::Span;

/// Verified bearer-token claims for the requesting user. Any verification
/// failure rejects with a plain 401; the reason is never exposed.
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let claims = app_state
            .auth_service
            .verify_token(token)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        Span::current().record("user_id", &claims.sub);

        Ok(AuthUser(claims))
    }
}
