use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::responses::RsvpRow;
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::access::resolve_event_access;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub async fn list_rsvps(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(slug_or_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (event, _) =
        resolve_event_access(&state.event_repo, &state.event_admin_repo, &actor, &slug_or_id).await?;

    let rsvps = state.rsvp_repo.list_by_event(&event.id).await?;
    let out: Vec<RsvpRow> = rsvps.into_iter().map(RsvpRow::from).collect();
    Ok(Json(out))
}
