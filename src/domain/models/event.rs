use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// An invitation campaign. `config` is the invitation content (theme, copy,
/// sections) serialized as JSON text; the domain stores and returns it
/// verbatim and never interprets it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub config: String,
    pub created_by: String,
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(slug: String, name: String, config: String, created_by: String, owner_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            slug,
            name,
            config,
            created_by,
            owner_id: Some(owner_id),
            created_at: Utc::now(),
        }
    }

    /// The user who controls this event. Falls back to the creator for rows
    /// predating the `owner_id` column.
    pub fn effective_owner(&self) -> &str {
        self.owner_id.as_deref().unwrap_or(&self.created_by)
    }
}
