use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Marketing-funnel capture row, append-only.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct EarlyAccessLead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub event_type: Option<String>,
    pub plan: Option<String>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EarlyAccessLead {
    pub fn new(name: String, email: String, event_type: Option<String>, plan: Option<String>, city: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            event_type,
            plan,
            city,
            created_at: Utc::now(),
        }
    }
}
