use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::{AssignAdminRequest, CreateEventRequest, UpdateEventRequest, UpdateOwnerRequest},
    responses::{AdminEventSummary, CreatedOwner, EventCreatedResponse, EventDetailResponse},
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{event::Event, user::{User, ROLE_EVENT_ADMIN}};
use crate::domain::services::{access::{require_main_admin, resolve_event_access}, slug};
use crate::error::AppError;
use crate::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_main_admin(&actor)?;

    let (Some(raw_slug), Some(name)) = (payload.slug, payload.name) else {
        return Err(AppError::Validation("slug and name required".into()));
    };
    if name.trim().is_empty() {
        return Err(AppError::Validation("slug and name required".into()));
    }
    let event_slug = slug::normalize(&raw_slug)?;

    if state.event_repo.find_by_slug(&event_slug).await?.is_some() {
        return Err(AppError::Conflict("Slug already exists".into()));
    }

    let mut owner_id = payload.owner_id.unwrap_or_else(|| actor.sub.clone());
    let mut created_owner = None;

    if let (Some(owner_email), Some(owner_password)) = (payload.owner_email, payload.owner_password) {
        let owner_email = owner_email.trim().to_string();
        if owner_email.is_empty() || owner_password.is_empty() {
            return Err(AppError::Validation(
                "ownerEmail and ownerPassword required when creating event owner".into(),
            ));
        }
        if state.user_repo.find_by_email(&owner_email).await?.is_some() {
            return Err(AppError::Conflict("Event owner email already in use".into()));
        }

        let hash = state.auth_service.hash_password(&owner_password)?;
        let owner = User::new(owner_email, hash, ROLE_EVENT_ADMIN.to_string());
        let owner = state.user_repo.create(&owner).await?;

        owner_id = owner.id.clone();
        created_owner = Some(CreatedOwner { id: owner.id, email: owner.email });
    }

    let config = match payload.config {
        Some(value) => value.to_string(),
        None => "{}".to_string(),
    };

    let event = Event::new(event_slug, name, config, actor.sub.clone(), owner_id.clone());
    let created = state.event_repo.create(&event).await?;

    if created_owner.is_some() {
        state.event_admin_repo.assign(&created.id, &owner_id).await?;
    }

    info!("Created event {} ({})", created.slug, created.id);

    Ok((
        StatusCode::CREATED,
        Json(EventCreatedResponse {
            id: created.id,
            slug: created.slug,
            name: created.name,
            owner_id,
            created_owner,
        }),
    ))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let events = if actor.is_main_admin() {
        state.event_repo.list_all().await?
    } else {
        state.event_repo.list_visible(&actor.sub).await?
    };

    let out: Vec<AdminEventSummary> = events.iter().map(AdminEventSummary::from).collect();
    Ok(Json(out))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(slug_or_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (event, tier) =
        resolve_event_access(&state.event_repo, &state.event_admin_repo, &actor, &slug_or_id).await?;

    let guest_count = state.guest_repo.count_by_event(&event.id).await?;
    let rsvp_count = state.rsvp_repo.count_by_event(&event.id).await?;
    let coming_count = state.rsvp_repo.attending_count(&event.id).await?;

    let config: Value = serde_json::from_str(&event.config).map_err(|_| AppError::Internal)?;

    let mut out = EventDetailResponse {
        id: event.id.clone(),
        slug: event.slug.clone(),
        name: event.name.clone(),
        config,
        created_at: event.created_at,
        guest_count,
        rsvp_count,
        coming_count,
        owner_id: None,
        owner_email: None,
    };

    // Owner identity is visible to the system admin only.
    if tier.is_system_admin() {
        if let Some(owner) = state.user_repo.find_by_id(event.effective_owner()).await? {
            out.owner_id = Some(owner.id);
            out.owner_email = Some(owner.email);
        }
    }

    Ok(Json(out))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(slug_or_id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (event, tier) =
        resolve_event_access(&state.event_repo, &state.event_admin_repo, &actor, &slug_or_id).await?;

    if let Some(config) = payload.config {
        state.event_repo.update_config(&event.id, &config.to_string()).await?;
    }

    if let Some(name) = payload.name {
        if !tier.is_system_admin() {
            return Err(AppError::Forbidden(
                "Only the system admin can change the event name".into(),
            ));
        }
        state.event_repo.update_name(&event.id, &name).await?;
    }

    if let Some(new_slug) = payload.slug {
        if !tier.is_system_admin() {
            return Err(AppError::Forbidden(
                "Only the system admin can change the event URL".into(),
            ));
        }

        let normalized = slug::normalize(&new_slug)?;
        if normalized == event.slug {
            return Ok(Json(json!({ "ok": true })));
        }

        if let Some(existing) = state.event_repo.find_by_slug(&normalized).await? {
            if existing.id != event.id {
                return Err(AppError::Conflict(
                    "That URL is already used by another event".into(),
                ));
            }
        }

        let guest_count = state.guest_repo.count_by_event(&event.id).await?;
        let rsvp_count = state.rsvp_repo.count_by_event(&event.id).await?;

        if guest_count > 0 || rsvp_count > 0 {
            // The slug is baked into every sent invite link, so replacing it
            // orphans existing guests and RSVPs. That deletion only happens
            // on an explicitly confirmed request.
            if !payload.confirm_remove_guests_and_rsvps {
                return Err(AppError::RequiresConfirmation { guest_count, rsvp_count });
            }
            state.event_repo.change_slug_removing_dependents(&event.id, &normalized).await?;
            info!(
                "Changed slug of event {} to {} removing {} guests and {} RSVPs",
                event.id, normalized, guest_count, rsvp_count
            );
        } else {
            state.event_repo.update_slug(&event.id, &normalized).await?;
        }

        return Ok(Json(json!({ "ok": true, "slug": normalized })));
    }

    Ok(Json(json!({ "ok": true })))
}

pub async fn update_owner(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(slug_or_id): Path<String>,
    Json(payload): Json<UpdateOwnerRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_main_admin(&actor)?;

    let event = state
        .event_repo
        .find_by_slug_or_id(&slug_or_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
    let owner_id = event.effective_owner().to_string();

    let new_email = payload.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty());
    if new_email.is_none() && payload.new_password.is_none() {
        return Err(AppError::Validation(
            "Provide email and/or newPassword to update".into(),
        ));
    }

    if let Some(email) = new_email {
        if let Some(existing) = state.user_repo.find_by_email(&email).await? {
            if existing.id != owner_id {
                return Err(AppError::Conflict("That email is already in use".into()));
            }
        }
        state.user_repo.update_email(&owner_id, &email).await?;
    }

    if let Some(password) = payload.new_password {
        let hash = state.auth_service.hash_password(&password)?;
        state.user_repo.update_password_hash(&owner_id, &hash).await?;
    }

    info!("Updated owner credentials for event {}", event.id);

    Ok(Json(json!({ "ok": true })))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(slug_or_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (event, tier) =
        resolve_event_access(&state.event_repo, &state.event_admin_repo, &actor, &slug_or_id).await?;

    if !tier.is_system_admin() {
        return Err(AppError::Forbidden("Only system admin can delete events".into()));
    }

    state.event_repo.delete(&event.id).await?;

    info!("Deleted event {} ({})", event.slug, event.id);

    Ok(Json(json!({ "ok": true })))
}

pub async fn assign_admin(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(slug_or_id): Path<String>,
    Json(payload): Json<AssignAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_main_admin(&actor)?;

    let event = state
        .event_repo
        .find_by_slug_or_id(&slug_or_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    let Some(user_id) = payload.user_id.filter(|u| !u.is_empty()) else {
        return Err(AppError::Validation("userId required".into()));
    };

    if state.user_repo.find_by_id(&user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }

    if state.event_admin_repo.is_assigned(&event.id, &user_id).await? {
        return Err(AppError::Conflict("Already assigned".into()));
    }
    state.event_admin_repo.assign(&event.id, &user_id).await?;

    info!("Assigned user {} as admin of event {}", user_id, event.id);

    Ok((StatusCode::CREATED, Json(json!({ "ok": true }))))
}
