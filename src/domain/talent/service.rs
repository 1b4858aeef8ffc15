use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use super::directory::{self, TalentFilter};
use super::dto::{
    AdminActorQuery, AudioSampleInput, TalentProfileResponse, TalentQuery, TalentSummaryResponse,
    VoiceActorInput,
};
use super::error::TalentServiceError;
use super::model::{AudioSample, Talent, VoiceActor};
use crate::domain::pricing::RateCard;
use crate::infrastructure::repositories::VoiceActorRepository;

const FEATURED_LIMIT: usize = 6;
const MAX_SAMPLE_BYTES: i64 = 10 * 1024 * 1024;
const ALLOWED_AUDIO_TYPES: [&str; 5] = [
    "audio/mpeg",
    "audio/mp3",
    "audio/wav",
    "audio/ogg",
    "audio/m4a",
];
const ACTIVE_CATALOGUE_KEY: &str = "active";

pub struct TalentService {
    actor_repo: Arc<dyn VoiceActorRepository>,
    cache: Option<Cache<String, Arc<Vec<Talent>>>>,
}

impl TalentService {
    pub fn new(
        actor_repo: Arc<dyn VoiceActorRepository>,
        cache_enabled: bool,
        cache_ttl: Duration,
    ) -> Self {
        let cache = if cache_enabled {
            Some(Cache::builder().max_capacity(1).time_to_live(cache_ttl).build())
        } else {
            None
        };

        Self { actor_repo, cache }
    }

    /// Active talents in catalogue order, served from cache when enabled
    async fn active_catalogue(&self) -> Result<Arc<Vec<Talent>>, TalentServiceError> {
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(ACTIVE_CATALOGUE_KEY).await {
                tracing::debug!(talents = cached.len(), "Talent catalogue cache hit");
                return Ok(cached);
            }
        }

        let mut talents = self.actor_repo.list_talents(true).await?;
        directory::sort_by_actor_number(&mut talents);
        let talents = Arc::new(talents);

        if let Some(cache) = &self.cache {
            cache
                .insert(ACTIVE_CATALOGUE_KEY.to_string(), talents.clone())
                .await;
        }

        Ok(talents)
    }

    fn invalidate_catalogue(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }

    pub async fn list_talents(
        &self,
        query: TalentQuery,
    ) -> Result<Vec<TalentSummaryResponse>, TalentServiceError> {
        let filter = TalentFilter::from(query);
        let catalogue = self.active_catalogue().await?;
        let talents = directory::apply(catalogue.as_ref().clone(), &filter);

        tracing::debug!(
            results = talents.len(),
            sort = ?filter.sort,
            "Talent catalogue filtered"
        );

        Ok(talents.iter().map(TalentSummaryResponse::from).collect())
    }

    pub async fn featured_talents(&self) -> Result<Vec<TalentSummaryResponse>, TalentServiceError> {
        let catalogue = self.active_catalogue().await?;

        Ok(catalogue
            .iter()
            .filter(|t| t.actor.is_featured)
            .take(FEATURED_LIMIT)
            .map(TalentSummaryResponse::from)
            .collect())
    }

    /// Public profile; inactive actors are hidden
    pub async fn get_talent(
        &self,
        actor_id: &str,
    ) -> Result<TalentProfileResponse, TalentServiceError> {
        let catalogue = self.active_catalogue().await?;
        catalogue
            .iter()
            .find(|t| t.actor.actor_id == actor_id)
            .map(TalentProfileResponse::from)
            .ok_or(TalentServiceError::NotFound)
    }

    pub async fn list_actors(
        &self,
        query: AdminActorQuery,
    ) -> Result<Vec<Talent>, TalentServiceError> {
        let mut talents = self.actor_repo.list_talents(false).await?;
        directory::sort_by_actor_number(&mut talents);

        Ok(directory::admin_filter(
            talents,
            query.status.unwrap_or_default(),
            query.q.as_deref(),
        ))
    }

    pub async fn get_actor(&self, id: Uuid) -> Result<Talent, TalentServiceError> {
        self.actor_repo
            .find_talent_by_id(id)
            .await?
            .ok_or(TalentServiceError::NotFound)
    }

    pub async fn create_actor(
        &self,
        input: VoiceActorInput,
    ) -> Result<VoiceActor, TalentServiceError> {
        validate_actor(&input)?;

        let actor = self.actor_repo.create(&input).await?;
        self.invalidate_catalogue();

        tracing::info!(actor_id = %actor.actor_id, id = %actor.id, "Voice actor created");
        Ok(actor)
    }

    pub async fn update_actor(
        &self,
        id: Uuid,
        input: VoiceActorInput,
    ) -> Result<VoiceActor, TalentServiceError> {
        validate_actor(&input)?;

        let actor = self
            .actor_repo
            .update(id, &input)
            .await?
            .ok_or(TalentServiceError::NotFound)?;
        self.invalidate_catalogue();

        tracing::info!(actor_id = %actor.actor_id, id = %actor.id, "Voice actor updated");
        Ok(actor)
    }

    /// Removes the actor along with its rate card and samples
    pub async fn delete_actor(&self, id: Uuid) -> Result<(), TalentServiceError> {
        if !self.actor_repo.delete(id).await? {
            return Err(TalentServiceError::NotFound);
        }
        self.invalidate_catalogue();

        tracing::info!(id = %id, "Voice actor deleted");
        Ok(())
    }

    pub async fn set_rate_card(
        &self,
        id: Uuid,
        rate_card: RateCard,
    ) -> Result<Talent, TalentServiceError> {
        rate_card.validate()?;

        // 404 before writing so the upsert never hits the foreign key
        self.get_actor(id).await?;
        self.actor_repo.upsert_rate_card(id, &rate_card).await?;
        self.invalidate_catalogue();

        tracing::info!(id = %id, starting_price = %rate_card.starting_price(), "Rate card saved");
        self.get_actor(id).await
    }

    pub async fn add_sample(
        &self,
        actor_id: Uuid,
        input: AudioSampleInput,
    ) -> Result<AudioSample, TalentServiceError> {
        validate_sample(&input)?;
        self.get_actor(actor_id).await?;

        let sample = self.actor_repo.create_sample(actor_id, &input).await?;
        self.invalidate_catalogue();

        Ok(sample)
    }

    pub async fn update_sample(
        &self,
        sample_id: Uuid,
        input: AudioSampleInput,
    ) -> Result<AudioSample, TalentServiceError> {
        validate_sample(&input)?;

        let sample = self
            .actor_repo
            .update_sample(sample_id, &input)
            .await?
            .ok_or(TalentServiceError::SampleNotFound)?;
        self.invalidate_catalogue();

        Ok(sample)
    }

    pub async fn delete_sample(&self, sample_id: Uuid) -> Result<(), TalentServiceError> {
        if !self.actor_repo.delete_sample(sample_id).await? {
            return Err(TalentServiceError::SampleNotFound);
        }
        self.invalidate_catalogue();

        Ok(())
    }
}

fn validate_actor(input: &VoiceActorInput) -> Result<(), TalentServiceError> {
    if input.actor_id.trim().is_empty() {
        return Err(TalentServiceError::Invalid("actor_id is required".to_string()));
    }

    if let Some(rating) = input.rating {
        if rating < rust_decimal::Decimal::ZERO || rating > rust_decimal::Decimal::from(5) {
            return Err(TalentServiceError::Invalid(
                "rating must be between 0 and 5".to_string(),
            ));
        }
    }

    if input.review_count.is_some_and(|count| count < 0) {
        return Err(TalentServiceError::Invalid(
            "review_count cannot be negative".to_string(),
        ));
    }

    Ok(())
}

fn validate_sample(input: &AudioSampleInput) -> Result<(), TalentServiceError> {
    if input.sample_id.trim().is_empty() || input.name.trim().is_empty() {
        return Err(TalentServiceError::Invalid(
            "sample_id and name are required".to_string(),
        ));
    }

    let url = input.audio_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/')) {
        return Err(TalentServiceError::Invalid(
            "audio_url must be an http(s) URL or an absolute path".to_string(),
        ));
    }

    if let Some(content_type) = &input.content_type {
        if !ALLOWED_AUDIO_TYPES.contains(&content_type.to_lowercase().as_str()) {
            return Err(TalentServiceError::Invalid(format!(
                "Unsupported audio content type: {}",
                content_type
            )));
        }
    }

    match input.file_size_bytes {
        Some(size) if size < 0 => Err(TalentServiceError::Invalid(
            "file_size_bytes cannot be negative".to_string(),
        )),
        Some(size) if size > MAX_SAMPLE_BYTES => Err(TalentServiceError::Invalid(
            "Audio sample exceeds the 10 MB limit".to_string(),
        )),
        _ => Ok(()),
    }
}
