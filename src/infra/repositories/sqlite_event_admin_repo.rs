use crate::domain::ports::EventAdminRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventAdminRepo {
    pool: SqlitePool,
}

impl SqliteEventAdminRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventAdminRepository for SqliteEventAdminRepo {
    async fn assign(&self, event_id: &str, user_id: &str) -> Result<(), AppError> {
        // Duplicate assignment hits the composite primary key and surfaces
        // as Conflict at the error boundary.
        sqlx::query("INSERT INTO event_admins (event_id, user_id) VALUES (?, ?)")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn is_assigned(&self, event_id: &str, user_id: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM event_admins WHERE event_id = ? AND user_id = ?)",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(exists)
    }
}
