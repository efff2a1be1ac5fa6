use crate::domain::models::{auth::Claims, event::Event};
use crate::domain::ports::{EventAdminRepository, EventRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Permission tier of an authenticated actor for one event, most to least
/// privileged. Produced only by [`resolve_event_access`]; handlers consume
/// the tier instead of re-checking ownership themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTier {
    SystemAdmin,
    EventOwner,
    AssignedAdmin,
}

impl AccessTier {
    /// Rename, slug change, deletion, owner-credential changes and admin
    /// assignment stay with the system admin even for the event's owner.
    pub fn is_system_admin(&self) -> bool {
        matches!(self, AccessTier::SystemAdmin)
    }
}

pub fn require_main_admin(actor: &Claims) -> Result<(), AppError> {
    if actor.is_main_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Main admin only".into()))
    }
}

/// Resolves the target event by id or slug and determines the actor's tier.
///
/// A missing event fails with `NotFound` before any permission check, so the
/// response leaks nothing about who may access what. For an existing event
/// the first matching tier wins; an actor with no tier gets `Forbidden`.
pub async fn resolve_event_access(
    event_repo: &Arc<dyn EventRepository>,
    event_admin_repo: &Arc<dyn EventAdminRepository>,
    actor: &Claims,
    slug_or_id: &str,
) -> Result<(Event, AccessTier), AppError> {
    let event = event_repo
        .find_by_slug_or_id(slug_or_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

    if actor.is_main_admin() {
        return Ok((event, AccessTier::SystemAdmin));
    }

    if event.effective_owner() == actor.sub {
        return Ok((event, AccessTier::EventOwner));
    }

    if event_admin_repo.is_assigned(&event.id, &actor.sub).await? {
        return Ok((event, AccessTier::AssignedAdmin));
    }

    Err(AppError::Forbidden("Not an admin for this event".into()))
}
