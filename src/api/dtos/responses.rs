use crate::domain::models::{
    early_access::EarlyAccessLead,
    event::Event,
    guest::{Guest, GuestOverview},
    rsvp::Rsvp,
    user::User,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            slug: event.slug.clone(),
            name: event.name.clone(),
            created_at: event.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEventSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub owner_id: Option<String>,
}

impl From<&Event> for AdminEventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            slug: event.slug.clone(),
            name: event.name.clone(),
            created_at: event.created_at,
            created_by: event.created_by.clone(),
            owner_id: event.owner_id.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOwner {
    pub id: String,
    pub email: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreatedResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_owner: Option<CreatedOwner>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub config: Value,
    pub created_at: DateTime<Utc>,
    pub guest_count: i64,
    pub rsvp_count: i64,
    pub coming_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEventResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub config: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestListEntry {
    pub id: String,
    pub token: String,
    pub name: String,
    pub partner_name: Option<String>,
    pub max_extra_guests: Option<i64>,
    pub first_opened_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub has_rsvp: bool,
}

impl From<GuestOverview> for GuestListEntry {
    fn from(g: GuestOverview) -> Self {
        Self {
            id: g.id,
            token: g.token,
            name: g.name,
            partner_name: g.partner_name,
            max_extra_guests: g.max_extra_guests,
            first_opened_at: g.first_opened_at,
            created_at: g.created_at,
            has_rsvp: g.has_rsvp,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCreatedResponse {
    pub id: String,
    pub token: String,
    pub name: String,
    pub partner_name: Option<String>,
    pub max_extra_guests: Option<i64>,
    pub invite_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicGuestResponse {
    pub id: String,
    pub token: String,
    pub name: String,
    pub partner_name: Option<String>,
    pub max_extra_guests: Option<i64>,
}

impl From<&Guest> for PublicGuestResponse {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id.clone(),
            token: guest.token.clone(),
            name: guest.name.clone(),
            partner_name: guest.partner_name.clone(),
            max_extra_guests: guest.max_extra_guests,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRow {
    pub id: String,
    pub guest_id: Option<String>,
    pub guest_name: String,
    pub partner_name: Option<String>,
    pub attendance: String,
    pub extra_guests: i64,
    pub song1: Option<String>,
    pub song2: Option<String>,
    pub reaction: Option<String>,
    pub message: Option<String>,
    pub submission_time: DateTime<Utc>,
}

impl From<Rsvp> for RsvpRow {
    fn from(r: Rsvp) -> Self {
        Self {
            id: r.id,
            guest_id: r.guest_id,
            guest_name: r.guest_name,
            partner_name: r.partner_name,
            attendance: r.attendance,
            extra_guests: r.extra_guests,
            song1: r.song1,
            song2: r.song2,
            reaction: r.reaction,
            message: r.message,
            submission_time: r.submission_time,
        }
    }
}

#[derive(Serialize)]
pub struct RsvpStatusResponse {
    pub found: bool,
}

#[derive(Serialize)]
pub struct SubmittedResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub event_type: Option<String>,
    pub plan: Option<String>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<EarlyAccessLead> for LeadRow {
    fn from(l: EarlyAccessLead) -> Self {
        Self {
            id: l.id,
            name: l.name,
            email: l.email,
            event_type: l.event_type,
            plan: l.plan,
            city: l.city,
            created_at: l.created_at,
        }
    }
}
