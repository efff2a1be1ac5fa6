use crate::domain::{models::rsvp::Rsvp, ports::RsvpRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRsvpRepo {
    pool: SqlitePool,
}

impl SqliteRsvpRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for SqliteRsvpRepo {
    async fn create(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError> {
        sqlx::query_as::<_, Rsvp>(
            r#"INSERT INTO rsvps (id, event_id, guest_id, guest_name, partner_name, attendance,
                                  extra_guests, song1, song2, reaction, message, submission_time)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&rsvp.id)
        .bind(&rsvp.event_id)
        .bind(&rsvp.guest_id)
        .bind(&rsvp.guest_name)
        .bind(&rsvp.partner_name)
        .bind(&rsvp.attendance)
        .bind(rsvp.extra_guests)
        .bind(&rsvp.song1)
        .bind(&rsvp.song2)
        .bind(&rsvp.reaction)
        .bind(&rsvp.message)
        .bind(rsvp.submission_time)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "SELECT * FROM rsvps WHERE event_id = ? ORDER BY submission_time DESC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn exists_for_guest(&self, event_id: &str, guest_id: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM rsvps WHERE event_id = ? AND guest_id = ?)",
        )
        .bind(event_id)
        .bind(guest_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(exists)
    }

    async fn count_by_event(&self, event_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rsvps WHERE event_id = ?")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn attending_count(&self, event_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar(
            r#"SELECT COALESCE(SUM(
                   1
                   + CASE WHEN COALESCE(TRIM(partner_name), '') != '' THEN 1 ELSE 0 END
                   + COALESCE(extra_guests, 0)
               ), 0)
               FROM rsvps WHERE event_id = ? AND attendance = 'yes'"#,
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
