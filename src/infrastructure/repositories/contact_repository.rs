use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::contact::{ContactCounts, ContactStatus, ContactSubmission, NewContactSubmission};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, submission: &NewContactSubmission) -> AppResult<ContactSubmission>;

    /// Newest first
    async fn list(&self, status: Option<ContactStatus>) -> AppResult<Vec<ContactSubmission>>;

    async fn update_status(
        &self,
        id: Uuid,
        status: ContactStatus,
        admin_notes: Option<&str>,
    ) -> AppResult<Option<ContactSubmission>>;

    async fn counts(&self) -> AppResult<ContactCounts>;
}

const CONTACT_COLUMNS: &str = r#"
    id, name, email, subject, message, ip_address, user_agent, status, admin_notes,
    created_at, updated_at
"#;

pub struct PgContactRepository {
    pool: Arc<DbPool>,
}

impl PgContactRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn insert(&self, submission: &NewContactSubmission) -> AppResult<ContactSubmission> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let row = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            INSERT INTO contact_submissions (
                id, name, email, subject, message, ip_address, user_agent, status,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.subject)
        .bind(&submission.message)
        .bind(&submission.ip_address)
        .bind(&submission.user_agent)
        .bind(ContactStatus::New.as_str())
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    async fn list(&self, status: Option<ContactStatus>) -> AppResult<Vec<ContactSubmission>> {
        let pool = self.pool.as_ref();

        let rows = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            SELECT {}
            FROM contact_submissions
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
            CONTACT_COLUMNS
        ))
        .bind(status.map(|s| s.as_str()))
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ContactStatus,
        admin_notes: Option<&str>,
    ) -> AppResult<Option<ContactSubmission>> {
        let pool = self.pool.as_ref();

        let row = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            UPDATE contact_submissions
            SET status = $2, admin_notes = COALESCE($3, admin_notes), updated_at = $4
            WHERE id = $1
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(admin_notes)
        .bind(chrono::Utc::now())
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn counts(&self) -> AppResult<ContactCounts> {
        let pool = self.pool.as_ref();
        let (total, new) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'new') FROM contact_submissions",
        )
        .fetch_one(pool)
        .await?;

        Ok(ContactCounts { total, new })
    }
}
