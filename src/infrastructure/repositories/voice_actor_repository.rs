use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::pricing::{ActorRateCard, RateCard, RateCardSource};
use crate::domain::talent::{
    ActorCounts, AudioSample, AudioSampleInput, Talent, VoiceActor, VoiceActorInput,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;

/// Storage for voice actors, their rate cards and audio samples
#[async_trait]
pub trait VoiceActorRepository: Send + Sync {
    /// All actors with pricing and samples, in no particular order
    async fn list_talents(&self, active_only: bool) -> AppResult<Vec<Talent>>;

    /// Look up by public actor code regardless of status
    async fn find_talent(&self, actor_id: &str) -> AppResult<Option<Talent>>;

    async fn find_talent_by_id(&self, id: Uuid) -> AppResult<Option<Talent>>;

    /// Fails with `AppError::Conflict` when the actor code is taken
    async fn create(&self, input: &VoiceActorInput) -> AppResult<VoiceActor>;

    async fn update(&self, id: Uuid, input: &VoiceActorInput) -> AppResult<Option<VoiceActor>>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    async fn upsert_rate_card(&self, voice_actor_id: Uuid, rate_card: &RateCard) -> AppResult<()>;

    async fn create_sample(
        &self,
        voice_actor_id: Uuid,
        input: &AudioSampleInput,
    ) -> AppResult<AudioSample>;

    async fn update_sample(
        &self,
        sample_id: Uuid,
        input: &AudioSampleInput,
    ) -> AppResult<Option<AudioSample>>;

    async fn delete_sample(&self, sample_id: Uuid) -> AppResult<bool>;

    async fn count_actors(&self) -> AppResult<ActorCounts>;
}

#[derive(sqlx::FromRow)]
struct RateCardRow {
    voice_actor_id: Uuid,
    #[sqlx(flatten)]
    rate_card: RateCard,
}

const ACTOR_COLUMNS: &str = r#"
    id, actor_id, name, title, bio, image_url, cover_image_url, languages, tags,
    gradient_colors, is_featured, is_active, turnaround_time, rating, review_count,
    created_at, updated_at
"#;

const RATE_CARD_COLUMNS: &str = r#"
    voice_actor_id, is_fixed_price, fixed_price_amount, base_price, price_per_word,
    revision_fee, express_delivery_fee, background_music_fee, sound_effects_fee, min_order
"#;

const SAMPLE_COLUMNS: &str = r#"
    id, voice_actor_id, sample_id, name, category, description, audio_url, content_type,
    duration_seconds, file_size_bytes, order_index, is_active, created_at, updated_at
"#;

pub struct PgVoiceActorRepository {
    pool: Arc<DbPool>,
}

impl PgVoiceActorRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Attach rate cards and samples to a batch of actors
    async fn hydrate(&self, actors: Vec<VoiceActor>) -> AppResult<Vec<Talent>> {
        if actors.is_empty() {
            return Ok(Vec::new());
        }

        let pool = self.pool.as_ref();
        let ids: Vec<Uuid> = actors.iter().map(|a| a.id).collect();

        let rate_cards = sqlx::query_as::<_, RateCardRow>(&format!(
            "SELECT {} FROM actor_pricing WHERE voice_actor_id = ANY($1)",
            RATE_CARD_COLUMNS
        ))
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let samples = sqlx::query_as::<_, AudioSample>(&format!(
            "SELECT {} FROM audio_samples WHERE voice_actor_id = ANY($1) ORDER BY order_index ASC",
            SAMPLE_COLUMNS
        ))
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut cards_by_actor: HashMap<Uuid, RateCard> = rate_cards
            .into_iter()
            .map(|row| (row.voice_actor_id, row.rate_card))
            .collect();

        let mut samples_by_actor: HashMap<Uuid, Vec<AudioSample>> = HashMap::new();
        for sample in samples {
            samples_by_actor
                .entry(sample.voice_actor_id)
                .or_default()
                .push(sample);
        }

        Ok(actors
            .into_iter()
            .map(|actor| Talent {
                rate_card: cards_by_actor.remove(&actor.id),
                samples: samples_by_actor.remove(&actor.id).unwrap_or_default(),
                actor,
            })
            .collect())
    }

    async fn find_one(&self, column: &str, value: impl ToString) -> AppResult<Option<Talent>> {
        let pool = self.pool.as_ref();
        let query = format!(
            "SELECT {} FROM voice_actors WHERE {}::text = $1",
            ACTOR_COLUMNS, column
        );
        let actor = sqlx::query_as::<_, VoiceActor>(&query)
            .bind(value.to_string())
            .fetch_optional(pool)
            .await?;

        match actor {
            Some(actor) => Ok(self.hydrate(vec![actor]).await?.into_iter().next()),
            None => Ok(None),
        }
    }
}

fn map_unique_violation(e: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict(message.to_string());
        }
    }
    AppError::Database(e)
}

fn map_foreign_key_violation(e: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_foreign_key_violation() {
            return AppError::Conflict(message.to_string());
        }
    }
    AppError::Database(e)
}

#[async_trait]
impl VoiceActorRepository for PgVoiceActorRepository {
    async fn list_talents(&self, active_only: bool) -> AppResult<Vec<Talent>> {
        let pool = self.pool.as_ref();
        let actors = sqlx::query_as::<_, VoiceActor>(&format!(
            "SELECT {} FROM voice_actors WHERE ($1 = FALSE OR is_active = TRUE)",
            ACTOR_COLUMNS
        ))
        .bind(active_only)
        .fetch_all(pool)
        .await?;

        self.hydrate(actors).await
    }

    async fn find_talent(&self, actor_id: &str) -> AppResult<Option<Talent>> {
        self.find_one("actor_id", actor_id).await
    }

    async fn find_talent_by_id(&self, id: Uuid) -> AppResult<Option<Talent>> {
        self.find_one("id", id).await
    }

    async fn create(&self, input: &VoiceActorInput) -> AppResult<VoiceActor> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query_as::<_, VoiceActor>(&format!(
            r#"
            INSERT INTO voice_actors (
                id, actor_id, name, title, bio, image_url, cover_image_url, languages, tags,
                gradient_colors, is_featured, is_active, turnaround_time, rating, review_count,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $16)
            RETURNING {}
            "#,
            ACTOR_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(input.actor_id.trim())
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.bio)
        .bind(&input.image_url)
        .bind(&input.cover_image_url)
        .bind(&input.languages)
        .bind(&input.tags)
        .bind(&input.gradient_colors)
        .bind(input.is_featured)
        .bind(input.is_active)
        .bind(&input.turnaround_time)
        .bind(input.rating)
        .bind(input.review_count)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| map_unique_violation(e, "Actor id already exists"))
    }

    async fn update(&self, id: Uuid, input: &VoiceActorInput) -> AppResult<Option<VoiceActor>> {
        let pool = self.pool.as_ref();

        sqlx::query_as::<_, VoiceActor>(&format!(
            r#"
            UPDATE voice_actors
            SET actor_id = $2, name = $3, title = $4, bio = $5, image_url = $6,
                cover_image_url = $7, languages = $8, tags = $9, gradient_colors = $10,
                is_featured = $11, is_active = $12, turnaround_time = $13, rating = $14,
                review_count = $15, updated_at = $16
            WHERE id = $1
            RETURNING {}
            "#,
            ACTOR_COLUMNS
        ))
        .bind(id)
        .bind(input.actor_id.trim())
        .bind(&input.name)
        .bind(&input.title)
        .bind(&input.bio)
        .bind(&input.image_url)
        .bind(&input.cover_image_url)
        .bind(&input.languages)
        .bind(&input.tags)
        .bind(&input.gradient_colors)
        .bind(input.is_featured)
        .bind(input.is_active)
        .bind(&input.turnaround_time)
        .bind(input.rating)
        .bind(input.review_count)
        .bind(chrono::Utc::now())
        .fetch_optional(pool)
        .await
        .map_err(|e| map_unique_violation(e, "Actor id already exists"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM voice_actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                map_foreign_key_violation(e, "Actor has quote requests; deactivate it instead")
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn upsert_rate_card(&self, voice_actor_id: Uuid, rate_card: &RateCard) -> AppResult<()> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO actor_pricing (
                voice_actor_id, is_fixed_price, fixed_price_amount, base_price, price_per_word,
                revision_fee, express_delivery_fee, background_music_fee, sound_effects_fee,
                min_order, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
            ON CONFLICT (voice_actor_id) DO UPDATE SET
                is_fixed_price = EXCLUDED.is_fixed_price,
                fixed_price_amount = EXCLUDED.fixed_price_amount,
                base_price = EXCLUDED.base_price,
                price_per_word = EXCLUDED.price_per_word,
                revision_fee = EXCLUDED.revision_fee,
                express_delivery_fee = EXCLUDED.express_delivery_fee,
                background_music_fee = EXCLUDED.background_music_fee,
                sound_effects_fee = EXCLUDED.sound_effects_fee,
                min_order = EXCLUDED.min_order,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(voice_actor_id)
        .bind(rate_card.is_fixed_price)
        .bind(rate_card.fixed_price_amount)
        .bind(rate_card.base_price)
        .bind(rate_card.price_per_word)
        .bind(rate_card.revision_fee)
        .bind(rate_card.express_delivery_fee)
        .bind(rate_card.background_music_fee)
        .bind(rate_card.sound_effects_fee)
        .bind(rate_card.min_order)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn create_sample(
        &self,
        voice_actor_id: Uuid,
        input: &AudioSampleInput,
    ) -> AppResult<AudioSample> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        sqlx::query_as::<_, AudioSample>(&format!(
            r#"
            INSERT INTO audio_samples (
                id, voice_actor_id, sample_id, name, category, description, audio_url,
                content_type, duration_seconds, file_size_bytes, order_index, is_active,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            RETURNING {}
            "#,
            SAMPLE_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(voice_actor_id)
        .bind(&input.sample_id)
        .bind(&input.name)
        .bind(&input.category)
        .bind(&input.description)
        .bind(&input.audio_url)
        .bind(&input.content_type)
        .bind(input.duration_seconds)
        .bind(input.file_size_bytes)
        .bind(input.order_index)
        .bind(input.is_active)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| map_unique_violation(e, "Sample id already exists for this actor"))
    }

    async fn update_sample(
        &self,
        sample_id: Uuid,
        input: &AudioSampleInput,
    ) -> AppResult<Option<AudioSample>> {
        let pool = self.pool.as_ref();

        sqlx::query_as::<_, AudioSample>(&format!(
            r#"
            UPDATE audio_samples
            SET sample_id = $2, name = $3, category = $4, description = $5, audio_url = $6,
                content_type = $7, duration_seconds = $8, file_size_bytes = $9,
                order_index = $10, is_active = $11, updated_at = $12
            WHERE id = $1
            RETURNING {}
            "#,
            SAMPLE_COLUMNS
        ))
        .bind(sample_id)
        .bind(&input.sample_id)
        .bind(&input.name)
        .bind(&input.category)
        .bind(&input.description)
        .bind(&input.audio_url)
        .bind(&input.content_type)
        .bind(input.duration_seconds)
        .bind(input.file_size_bytes)
        .bind(input.order_index)
        .bind(input.is_active)
        .bind(chrono::Utc::now())
        .fetch_optional(pool)
        .await
        .map_err(|e| map_unique_violation(e, "Sample id already exists for this actor"))
    }

    async fn delete_sample(&self, sample_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM audio_samples WHERE id = $1")
            .bind(sample_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_actors(&self) -> AppResult<ActorCounts> {
        let pool = self.pool.as_ref();
        let (total, active, featured) = sqlx::query_as::<_, (i64, i64, i64)>(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE is_active),
                COUNT(*) FILTER (WHERE is_active AND is_featured)
            FROM voice_actors
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(ActorCounts {
            total,
            active,
            featured,
        })
    }
}

#[async_trait]
impl RateCardSource for PgVoiceActorRepository {
    async fn find_rate_card(&self, actor_id: &str) -> AppResult<Option<ActorRateCard>> {
        let pool = self.pool.as_ref();

        #[derive(sqlx::FromRow)]
        struct Row {
            actor_id: String,
            #[sqlx(flatten)]
            card: RateCardRow,
        }

        let row = sqlx::query_as::<_, Row>(
            r#"
            SELECT a.actor_id, p.voice_actor_id, p.is_fixed_price, p.fixed_price_amount,
                   p.base_price, p.price_per_word, p.revision_fee, p.express_delivery_fee,
                   p.background_music_fee, p.sound_effects_fee, p.min_order
            FROM voice_actors a
            JOIN actor_pricing p ON p.voice_actor_id = a.id
            WHERE a.actor_id = $1 AND a.is_active = TRUE
            "#,
        )
        .bind(actor_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|row| ActorRateCard {
            voice_actor_id: row.card.voice_actor_id,
            actor_id: row.actor_id,
            rate_card: row.card.rate_card,
        }))
    }
}
