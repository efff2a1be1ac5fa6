use crate::domain::models::{
    early_access::EarlyAccessLead,
    event::Event,
    guest::{Guest, GuestOverview},
    rsvp::Rsvp,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn update_email(&self, id: &str, email: &str) -> Result<(), AppError>;
    async fn update_password_hash(&self, id: &str, password_hash: &str) -> Result<(), AppError>;
    async fn main_admin_exists(&self) -> Result<bool, AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError>;
    /// Single lookup used by the access resolver: the path segment may be
    /// either the event id or its slug.
    async fn find_by_slug_or_id(&self, key: &str) -> Result<Option<Event>, AppError>;
    async fn list_all(&self) -> Result<Vec<Event>, AppError>;
    /// Events where the user is owner, creator, or an assigned admin.
    async fn list_visible(&self, user_id: &str) -> Result<Vec<Event>, AppError>;
    async fn update_config(&self, id: &str, config: &str) -> Result<(), AppError>;
    async fn update_name(&self, id: &str, name: &str) -> Result<(), AppError>;
    async fn update_slug(&self, id: &str, slug: &str) -> Result<(), AppError>;
    /// Confirmed destructive slug change: removes the event's RSVPs and
    /// guests, then applies the new slug.
    async fn change_slug_removing_dependents(&self, id: &str, slug: &str) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EventAdminRepository: Send + Sync {
    async fn assign(&self, event_id: &str, user_id: &str) -> Result<(), AppError>;
    async fn is_assigned(&self, event_id: &str, user_id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError>;
    async fn find_by_id(&self, event_id: &str, id: &str) -> Result<Option<Guest>, AppError>;
    async fn find_by_token(&self, event_id: &str, token: &str) -> Result<Option<Guest>, AppError>;
    /// Resolves a guest by row id or invite token, whichever matches.
    async fn find_by_id_or_token(&self, event_id: &str, key: &str) -> Result<Option<Guest>, AppError>;
    async fn list_overview(&self, event_id: &str) -> Result<Vec<GuestOverview>, AppError>;
    async fn update(&self, guest: &Guest) -> Result<Guest, AppError>;
    /// Returns false when no matching row existed.
    async fn delete(&self, event_id: &str, id: &str) -> Result<bool, AppError>;
    /// Sets `first_opened_at` only when it is still unset.
    async fn mark_opened(&self, id: &str, opened_at: DateTime<Utc>) -> Result<(), AppError>;
    async fn count_by_event(&self, event_id: &str) -> Result<i64, AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn create(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Rsvp>, AppError>;
    async fn exists_for_guest(&self, event_id: &str, guest_id: &str) -> Result<bool, AppError>;
    async fn count_by_event(&self, event_id: &str) -> Result<i64, AppError>;
    /// Attending headcount: each "yes" RSVP counts the guest, plus one when a
    /// partner name is present, plus the declared extra guests.
    async fn attending_count(&self, event_id: &str) -> Result<i64, AppError>;
}

#[async_trait]
pub trait EarlyAccessRepository: Send + Sync {
    async fn create(&self, lead: &EarlyAccessLead) -> Result<EarlyAccessLead, AppError>;
    async fn list(&self) -> Result<Vec<EarlyAccessLead>, AppError>;
}
