use serde::Deserialize;
use serde_json::Value;

// Required fields are Option so a missing field surfaces as a 400 with the
// field name instead of a deserialization rejection; handlers validate.

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub config: Option<Value>,
    pub owner_id: Option<String>,
    pub owner_email: Option<String>,
    pub owner_password: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub config: Option<Value>,
    pub slug: Option<String>,
    pub confirm_remove_guests_and_rsvps: bool,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateOwnerRequest {
    pub email: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateGuestRequest {
    pub name: Option<String>,
    pub partner_name: Option<String>,
    pub max_extra_guests: Option<i64>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateGuestRequest {
    pub name: Option<String>,
    pub partner_name: Option<String>,
    pub max_extra_guests: Option<i64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AssignAdminRequest {
    pub user_id: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitRsvpRequest {
    pub guest_id: Option<String>,
    pub guest_name: Option<String>,
    pub partner_name: Option<String>,
    pub attendance: Option<String>,
    pub extra_guests: i64,
    pub favorite_songs: Vec<String>,
    pub reaction: Option<String>,
    pub message: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RsvpStatusQuery {
    pub guest_id: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct EarlyAccessRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub event_type: Option<String>,
    pub plan: Option<String>,
    pub city: Option<String>,
}
