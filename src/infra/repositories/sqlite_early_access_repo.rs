use crate::domain::{models::early_access::EarlyAccessLead, ports::EarlyAccessRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEarlyAccessRepo {
    pool: SqlitePool,
}

impl SqliteEarlyAccessRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EarlyAccessRepository for SqliteEarlyAccessRepo {
    async fn create(&self, lead: &EarlyAccessLead) -> Result<EarlyAccessLead, AppError> {
        sqlx::query_as::<_, EarlyAccessLead>(
            r#"INSERT INTO early_access_leads (id, name, email, event_type, plan, city, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&lead.id)
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.event_type)
        .bind(&lead.plan)
        .bind(&lead.city)
        .bind(lead.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<EarlyAccessLead>, AppError> {
        sqlx::query_as::<_, EarlyAccessLead>(
            "SELECT * FROM early_access_leads ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
