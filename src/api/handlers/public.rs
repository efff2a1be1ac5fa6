use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::{RsvpStatusQuery, SubmitRsvpRequest},
    responses::{EventSummary, PublicEventResponse, PublicGuestResponse, RsvpStatusResponse, SubmittedResponse},
};
use crate::domain::models::rsvp::{NewRsvpParams, Rsvp, ATTENDANCE_NO, ATTENDANCE_YES};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Unauthenticated routes for the guest-facing site. Unknown slugs and
/// unknown tokens both answer with the same generic 404.

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list_all().await?;
    let out: Vec<EventSummary> = events.iter().map(EventSummary::from).collect();
    Ok(Json(out))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_slug(&event_slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let config: Value = serde_json::from_str(&event.config).map_err(|_| AppError::Internal)?;

    Ok(Json(PublicEventResponse {
        id: event.id,
        slug: event.slug,
        name: event.name,
        config,
    }))
}

pub async fn get_guest(
    State(state): State<Arc<AppState>>,
    Path((event_slug, token)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_slug(&event_slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let guest = state
        .guest_repo
        .find_by_token(&event.id, &token)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".into()))?;

    Ok(Json(PublicGuestResponse::from(&guest)))
}

pub async fn mark_opened(
    State(state): State<Arc<AppState>>,
    Path((event_slug, token)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_slug(&event_slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let guest = state
        .guest_repo
        .find_by_token(&event.id, &token)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".into()))?;

    // First open wins; every later call is a successful no-op.
    state.guest_repo.mark_opened(&guest.id, Utc::now()).await?;

    Ok(Json(json!({ "ok": true })))
}

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    Path(event_slug): Path<String>,
    Json(payload): Json<SubmitRsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_slug(&event_slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let (Some(guest_name), Some(attendance)) = (payload.guest_name, payload.attendance) else {
        return Err(AppError::Validation("guestName and attendance required".into()));
    };
    if guest_name.trim().is_empty() {
        return Err(AppError::Validation("guestName and attendance required".into()));
    }
    if attendance != ATTENDANCE_YES && attendance != ATTENDANCE_NO {
        return Err(AppError::Validation("attendance must be 'yes' or 'no'".into()));
    }
    if payload.extra_guests < 0 {
        return Err(AppError::Validation("extraGuests must be 0 or greater".into()));
    }

    // A dedicated-link submission must reference a real guest of this event,
    // and may not exceed that guest's extra-guest cap.
    if let Some(guest_id) = &payload.guest_id {
        let guest = state
            .guest_repo
            .find_by_id(&event.id, guest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".into()))?;

        if let Some(max) = guest.max_extra_guests {
            if payload.extra_guests > max {
                return Err(AppError::Validation(format!(
                    "extraGuests may be at most {}",
                    max
                )));
            }
        }
    }

    let rsvp = Rsvp::new(NewRsvpParams {
        event_id: event.id,
        guest_id: payload.guest_id,
        guest_name,
        partner_name: payload.partner_name.filter(|p| !p.is_empty()),
        attendance,
        extra_guests: payload.extra_guests,
        songs: payload.favorite_songs,
        reaction: payload.reaction.filter(|r| !r.is_empty()),
        message: payload.message.filter(|m| !m.is_empty()),
    });
    let created = state.rsvp_repo.create(&rsvp).await?;

    info!("RSVP {} recorded for event {}", created.id, event_slug);

    Ok((
        StatusCode::CREATED,
        Json(SubmittedResponse { success: true, id: created.id }),
    ))
}

pub async fn rsvp_status(
    State(state): State<Arc<AppState>>,
    Path(event_slug): Path<String>,
    Query(query): Query<RsvpStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_slug(&event_slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let Some(key) = query.guest_id else {
        return Ok(Json(RsvpStatusResponse { found: false }));
    };

    let Some(guest) = state.guest_repo.find_by_id_or_token(&event.id, &key).await? else {
        return Ok(Json(RsvpStatusResponse { found: false }));
    };

    let found = state.rsvp_repo.exists_for_guest(&event.id, &guest.id).await?;
    Ok(Json(RsvpStatusResponse { found }))
}
