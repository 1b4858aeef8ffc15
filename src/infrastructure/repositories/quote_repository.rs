use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::quote::{NewQuoteRequest, QuoteCounts, QuoteRequest, QuoteStatus};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;

/// Quote submission sink plus the back-office queries over it
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn insert(&self, quote: &NewQuoteRequest) -> AppResult<QuoteRequest>;

    /// Newest first
    async fn list(&self, status: Option<QuoteStatus>) -> AppResult<Vec<QuoteRequest>>;

    async fn update_status(
        &self,
        id: Uuid,
        status: QuoteStatus,
        admin_notes: Option<&str>,
    ) -> AppResult<Option<QuoteRequest>>;

    async fn counts(&self) -> AppResult<QuoteCounts>;
}

const QUOTE_COLUMNS: &str = r#"
    id, voice_actor_id, client_name, client_email, client_phone, script_text, word_count,
    revisions_requested, express_delivery, background_music, sound_effects, estimated_price,
    delivery_time, special_requirements, status, admin_notes, created_at, updated_at
"#;

pub struct PgQuoteRepository {
    pool: Arc<DbPool>,
}

impl PgQuoteRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteRepository for PgQuoteRepository {
    async fn insert(&self, quote: &NewQuoteRequest) -> AppResult<QuoteRequest> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let row = sqlx::query_as::<_, QuoteRequest>(&format!(
            r#"
            INSERT INTO quote_requests (
                id, voice_actor_id, client_name, client_email, client_phone, script_text,
                word_count, revisions_requested, express_delivery, background_music,
                sound_effects, estimated_price, delivery_time, special_requirements, status,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $16)
            RETURNING {}
            "#,
            QUOTE_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(quote.voice_actor_id)
        .bind(&quote.client_name)
        .bind(&quote.client_email)
        .bind(&quote.client_phone)
        .bind(&quote.script_text)
        .bind(quote.word_count)
        .bind(quote.revisions_requested)
        .bind(quote.express_delivery)
        .bind(quote.background_music)
        .bind(quote.sound_effects)
        .bind(quote.estimated_price)
        .bind(&quote.delivery_time)
        .bind(&quote.special_requirements)
        .bind(QuoteStatus::Pending.as_str())
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    async fn list(&self, status: Option<QuoteStatus>) -> AppResult<Vec<QuoteRequest>> {
        let pool = self.pool.as_ref();

        let rows = sqlx::query_as::<_, QuoteRequest>(&format!(
            r#"
            SELECT {}
            FROM quote_requests
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
            QUOTE_COLUMNS
        ))
        .bind(status.map(|s| s.as_str()))
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: QuoteStatus,
        admin_notes: Option<&str>,
    ) -> AppResult<Option<QuoteRequest>> {
        let pool = self.pool.as_ref();

        // Notes are kept when the update does not carry new ones
        let row = sqlx::query_as::<_, QuoteRequest>(&format!(
            r#"
            UPDATE quote_requests
            SET status = $2, admin_notes = COALESCE($3, admin_notes), updated_at = $4
            WHERE id = $1
            RETURNING {}
            "#,
            QUOTE_COLUMNS
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(admin_notes)
        .bind(chrono::Utc::now())
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn counts(&self) -> AppResult<QuoteCounts> {
        let pool = self.pool.as_ref();
        let (total, pending) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'pending') FROM quote_requests",
        )
        .fetch_one(pool)
        .await?;

        Ok(QuoteCounts { total, pending })
    }
}
