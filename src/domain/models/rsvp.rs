use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ATTENDANCE_YES: &str = "yes";
pub const ATTENDANCE_NO: &str = "no";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Rsvp {
    pub id: String,
    pub event_id: String,
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

pub struct NewRsvpParams {
    pub event_id: String,
    pub guest_id: Option<String>,
    pub guest_name: String,
    pub partner_name: Option<String>,
    pub attendance: String,
    pub extra_guests: i64,
    pub songs: Vec<String>,
    pub reaction: Option<String>,
    pub message: Option<String>,
}

impl Rsvp {
    pub fn new(params: NewRsvpParams) -> Self {
        let mut songs = params.songs.into_iter();

        Self {
            id: Uuid::new_v4().to_string(),
            event_id: params.event_id,
            guest_id: params.guest_id,
            guest_name: params.guest_name,
            partner_name: params.partner_name,
            attendance: params.attendance,
            extra_guests: params.extra_guests,
            song1: songs.next(),
            song2: songs.next(),
            reaction: params.reaction,
            message: params.message,
            submission_time: Utc::now(),
        }
    }
}
