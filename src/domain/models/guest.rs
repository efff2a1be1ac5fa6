use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use rand::{distributions::Alphanumeric, Rng};

const TOKEN_LEN: usize = 16;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Guest {
    pub id: String,
    pub event_id: String,
    pub token: String,
    pub name: String,
    pub partner_name: Option<String>,
    pub max_extra_guests: Option<i64>,
    pub first_opened_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    pub fn new(event_id: String, name: String, partner_name: Option<String>, max_extra_guests: Option<i64>) -> Self {
        // Invite token is separate from the row id so the id can be shown in
        // admin tooling without handing out a usable invite link.
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            token,
            name,
            partner_name,
            max_extra_guests,
            first_opened_at: None,
            created_at: Utc::now(),
        }
    }
}

/// Guest row joined with whether any RSVP references it. Used by the admin
/// guest list.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct GuestOverview {
    pub id: String,
    pub token: String,
    pub name: String,
    pub partner_name: Option<String>,
    pub max_extra_guests: Option<i64>,
    pub first_opened_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub has_rsvp: bool,
}
