use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::{CreateGuestRequest, UpdateGuestRequest},
    responses::{GuestCreatedResponse, GuestListEntry},
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::guest::Guest;
use crate::domain::services::access::resolve_event_access;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(slug_or_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (event, _) =
        resolve_event_access(&state.event_repo, &state.event_admin_repo, &actor, &slug_or_id).await?;

    let guests = state.guest_repo.list_overview(&event.id).await?;
    let out: Vec<GuestListEntry> = guests.into_iter().map(GuestListEntry::from).collect();
    Ok(Json(out))
}

pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(slug_or_id): Path<String>,
    Json(payload): Json<CreateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (event, _) =
        resolve_event_access(&state.event_repo, &state.event_admin_repo, &actor, &slug_or_id).await?;

    let Some(name) = payload.name.filter(|n| !n.trim().is_empty()) else {
        return Err(AppError::Validation("name required".into()));
    };
    if payload.max_extra_guests.is_some_and(|n| n < 0) {
        return Err(AppError::Validation("maxExtraGuests must be 0 or greater".into()));
    }

    let partner_name = payload.partner_name.filter(|p| !p.is_empty());
    let guest = Guest::new(event.id.clone(), name, partner_name, payload.max_extra_guests);
    let created = state.guest_repo.create(&guest).await?;

    info!("Created guest {} for event {}", created.id, event.slug);

    // The dedicated link is slug-based; resolve through the event rather
    // than the path segment, which may have been the event id.
    let invite_url = format!("/e/{}/invite/{}", event.slug, created.token);

    Ok((
        StatusCode::CREATED,
        Json(GuestCreatedResponse {
            id: created.id,
            token: created.token,
            name: created.name,
            partner_name: created.partner_name,
            max_extra_guests: created.max_extra_guests,
            invite_url,
        }),
    ))
}

pub async fn update_guest(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path((slug_or_id, guest_id)): Path<(String, String)>,
    Json(payload): Json<UpdateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (event, _) =
        resolve_event_access(&state.event_repo, &state.event_admin_repo, &actor, &slug_or_id).await?;

    if payload.name.is_none() && payload.partner_name.is_none() && payload.max_extra_guests.is_none() {
        return Err(AppError::Validation("No fields to update".into()));
    }
    if payload.max_extra_guests.is_some_and(|n| n < 0) {
        return Err(AppError::Validation("maxExtraGuests must be 0 or greater".into()));
    }

    let mut guest = state
        .guest_repo
        .find_by_id(&event.id, &guest_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".into()))?;

    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("name required".into()));
        }
        guest.name = name;
    }
    if let Some(partner) = payload.partner_name {
        // An empty string clears the partner.
        guest.partner_name = if partner.is_empty() { None } else { Some(partner) };
    }
    if let Some(max) = payload.max_extra_guests {
        guest.max_extra_guests = Some(max);
    }

    state.guest_repo.update(&guest).await?;

    info!("Updated guest {} of event {}", guest_id, event.slug);

    Ok(Json(json!({ "ok": true })))
}

pub async fn delete_guest(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path((slug_or_id, guest_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (event, _) =
        resolve_event_access(&state.event_repo, &state.event_admin_repo, &actor, &slug_or_id).await?;

    let deleted = state.guest_repo.delete(&event.id, &guest_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Guest not found".into()));
    }

    info!("Deleted guest {} of event {}", guest_id, event.slug);

    Ok(Json(json!({ "ok": true })))
}
