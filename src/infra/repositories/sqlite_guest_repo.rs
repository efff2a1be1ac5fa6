use crate::domain::{
    models::guest::{Guest, GuestOverview},
    ports::GuestRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteGuestRepo {
    pool: SqlitePool,
}

impl SqliteGuestRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for SqliteGuestRepo {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(
            r#"INSERT INTO guests (id, event_id, token, name, partner_name, max_extra_guests, first_opened_at, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&guest.id)
        .bind(&guest.event_id)
        .bind(&guest.token)
        .bind(&guest.name)
        .bind(&guest.partner_name)
        .bind(guest.max_extra_guests)
        .bind(guest.first_opened_at)
        .bind(guest.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, event_id: &str, id: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE event_id = ? AND id = ?")
            .bind(event_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_token(&self, event_id: &str, token: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE event_id = ? AND token = ?")
            .bind(event_id)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id_or_token(&self, event_id: &str, key: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>(
            "SELECT * FROM guests WHERE event_id = ? AND (id = ? OR token = ?)",
        )
        .bind(event_id)
        .bind(key)
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_overview(&self, event_id: &str) -> Result<Vec<GuestOverview>, AppError> {
        sqlx::query_as::<_, GuestOverview>(
            r#"SELECT g.id, g.token, g.name, g.partner_name, g.max_extra_guests,
                      g.first_opened_at, g.created_at,
                      EXISTS(SELECT 1 FROM rsvps r WHERE r.guest_id = g.id AND r.event_id = g.event_id) AS has_rsvp
               FROM guests g
               WHERE g.event_id = ?
               ORDER BY g.name"#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(
            r#"UPDATE guests SET name = ?, partner_name = ?, max_extra_guests = ?
               WHERE id = ? AND event_id = ?
               RETURNING *"#,
        )
        .bind(&guest.name)
        .bind(&guest.partner_name)
        .bind(guest.max_extra_guests)
        .bind(&guest.id)
        .bind(&guest.event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, event_id: &str, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = ? AND event_id = ?")
            .bind(id)
            .bind(event_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn mark_opened(&self, id: &str, opened_at: DateTime<Utc>) -> Result<(), AppError> {
        // Conditional write keeps the unopened -> opened transition
        // at-most-once even under concurrent opens.
        sqlx::query("UPDATE guests SET first_opened_at = ? WHERE id = ? AND first_opened_at IS NULL")
            .bind(opened_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn count_by_event(&self, event_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM guests WHERE event_id = ?")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
