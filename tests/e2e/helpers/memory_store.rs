use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;
use voicecast_backend::domain::contact::{
    ContactCounts, ContactStatus, ContactSubmission, NewContactSubmission,
};
use voicecast_backend::domain::pricing::{ActorRateCard, RateCard, RateCardSource};
use voicecast_backend::domain::quote::{NewQuoteRequest, QuoteCounts, QuoteRequest, QuoteStatus};
use voicecast_backend::domain::talent::{
    ActorCounts, AudioSample, AudioSampleInput, Talent, VoiceActor, VoiceActorInput,
};
use voicecast_backend::error::{AppError, AppResult};
use voicecast_backend::infrastructure::db::DatabaseProbe;
use voicecast_backend::infrastructure::repositories::{
    ContactRepository, QuoteRepository, VoiceActorRepository,
};

#[derive(Default)]
struct State {
    actors: Vec<VoiceActor>,
    rate_cards: HashMap<Uuid, RateCard>,
    samples: Vec<AudioSample>,
    quotes: Vec<QuoteRequest>,
    contacts: Vec<ContactSubmission>,
}

impl State {
    fn talent(&self, actor: &VoiceActor) -> Talent {
        Talent {
            actor: actor.clone(),
            rate_card: self.rate_cards.get(&actor.id).cloned(),
            samples: self
                .samples
                .iter()
                .filter(|s| s.voice_actor_id == actor.id)
                .cloned()
                .collect(),
        }
    }
}

/// Repository doubles backed by process memory, one instance per test
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
    fail_submissions: AtomicBool,
    database_down: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make quote and contact inserts fail like an unreachable store
    pub fn fail_submissions(&self, fail: bool) {
        self.fail_submissions.store(fail, Ordering::SeqCst);
    }

    pub fn set_database_down(&self, down: bool) {
        self.database_down.store(down, Ordering::SeqCst);
    }

    pub fn quotes(&self) -> Vec<QuoteRequest> {
        self.state.read().quotes.clone()
    }

    pub fn contacts(&self) -> Vec<ContactSubmission> {
        self.state.read().contacts.clone()
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_submissions.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn actor_from_input(id: Uuid, input: &VoiceActorInput, created_at: chrono::DateTime<Utc>) -> VoiceActor {
    VoiceActor {
        id,
        actor_id: input.actor_id.trim().to_string(),
        name: input.name.clone(),
        title: input.title.clone(),
        bio: input.bio.clone(),
        image_url: input.image_url.clone(),
        cover_image_url: input.cover_image_url.clone(),
        languages: input.languages.clone(),
        tags: input.tags.clone(),
        gradient_colors: input.gradient_colors.clone(),
        is_featured: input.is_featured,
        is_active: input.is_active,
        turnaround_time: input.turnaround_time.clone(),
        rating: input.rating,
        review_count: input.review_count,
        created_at,
        updated_at: Utc::now(),
    }
}

fn sample_from_input(
    id: Uuid,
    voice_actor_id: Uuid,
    input: &AudioSampleInput,
    created_at: chrono::DateTime<Utc>,
) -> AudioSample {
    AudioSample {
        id,
        voice_actor_id,
        sample_id: input.sample_id.clone(),
        name: input.name.clone(),
        category: input.category.clone(),
        description: input.description.clone(),
        audio_url: input.audio_url.clone(),
        content_type: input.content_type.clone(),
        duration_seconds: input.duration_seconds,
        file_size_bytes: input.file_size_bytes,
        order_index: input.order_index,
        is_active: input.is_active,
        created_at,
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl VoiceActorRepository for InMemoryStore {
    async fn list_talents(&self, active_only: bool) -> AppResult<Vec<Talent>> {
        let state = self.state.read();
        Ok(state
            .actors
            .iter()
            .filter(|a| !active_only || a.is_active)
            .map(|a| state.talent(a))
            .collect())
    }

    async fn find_talent(&self, actor_id: &str) -> AppResult<Option<Talent>> {
        let state = self.state.read();
        Ok(state
            .actors
            .iter()
            .find(|a| a.actor_id == actor_id)
            .map(|a| state.talent(a)))
    }

    async fn find_talent_by_id(&self, id: Uuid) -> AppResult<Option<Talent>> {
        let state = self.state.read();
        Ok(state.actors.iter().find(|a| a.id == id).map(|a| state.talent(a)))
    }

    async fn create(&self, input: &VoiceActorInput) -> AppResult<VoiceActor> {
        let mut state = self.state.write();
        if state.actors.iter().any(|a| a.actor_id == input.actor_id.trim()) {
            return Err(AppError::Conflict("Actor id already exists".to_string()));
        }

        let actor = actor_from_input(Uuid::new_v4(), input, Utc::now());
        state.actors.push(actor.clone());
        Ok(actor)
    }

    async fn update(&self, id: Uuid, input: &VoiceActorInput) -> AppResult<Option<VoiceActor>> {
        let mut state = self.state.write();
        if state
            .actors
            .iter()
            .any(|a| a.id != id && a.actor_id == input.actor_id.trim())
        {
            return Err(AppError::Conflict("Actor id already exists".to_string()));
        }

        Ok(state.actors.iter_mut().find(|a| a.id == id).map(|actor| {
            *actor = actor_from_input(id, input, actor.created_at);
            actor.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.write();
        if state.quotes.iter().any(|q| q.voice_actor_id == id) {
            return Err(AppError::Conflict(
                "Actor has quote requests; deactivate it instead".to_string(),
            ));
        }

        let before = state.actors.len();
        state.actors.retain(|a| a.id != id);
        state.rate_cards.remove(&id);
        state.samples.retain(|s| s.voice_actor_id != id);
        Ok(state.actors.len() < before)
    }

    async fn upsert_rate_card(&self, voice_actor_id: Uuid, rate_card: &RateCard) -> AppResult<()> {
        self.state
            .write()
            .rate_cards
            .insert(voice_actor_id, rate_card.clone());
        Ok(())
    }

    async fn create_sample(
        &self,
        voice_actor_id: Uuid,
        input: &AudioSampleInput,
    ) -> AppResult<AudioSample> {
        let mut state = self.state.write();
        if state
            .samples
            .iter()
            .any(|s| s.voice_actor_id == voice_actor_id && s.sample_id == input.sample_id)
        {
            return Err(AppError::Conflict(
                "Sample id already exists for this actor".to_string(),
            ));
        }

        let sample = sample_from_input(Uuid::new_v4(), voice_actor_id, input, Utc::now());
        state.samples.push(sample.clone());
        Ok(sample)
    }

    async fn update_sample(
        &self,
        sample_id: Uuid,
        input: &AudioSampleInput,
    ) -> AppResult<Option<AudioSample>> {
        let mut state = self.state.write();
        Ok(state.samples.iter_mut().find(|s| s.id == sample_id).map(|sample| {
            *sample = sample_from_input(sample_id, sample.voice_actor_id, input, sample.created_at);
            sample.clone()
        }))
    }

    async fn delete_sample(&self, sample_id: Uuid) -> AppResult<bool> {
        let mut state = self.state.write();
        let before = state.samples.len();
        state.samples.retain(|s| s.id != sample_id);
        Ok(state.samples.len() < before)
    }

    async fn count_actors(&self) -> AppResult<ActorCounts> {
        let state = self.state.read();
        Ok(ActorCounts {
            total: state.actors.len() as i64,
            active: state.actors.iter().filter(|a| a.is_active).count() as i64,
            featured: state
                .actors
                .iter()
                .filter(|a| a.is_active && a.is_featured)
                .count() as i64,
        })
    }
}

#[async_trait]
impl RateCardSource for InMemoryStore {
    async fn find_rate_card(&self, actor_id: &str) -> AppResult<Option<ActorRateCard>> {
        let state = self.state.read();
        Ok(state
            .actors
            .iter()
            .find(|a| a.actor_id == actor_id && a.is_active)
            .and_then(|a| {
                state.rate_cards.get(&a.id).map(|card| ActorRateCard {
                    voice_actor_id: a.id,
                    actor_id: a.actor_id.clone(),
                    rate_card: card.clone(),
                })
            }))
    }
}

#[async_trait]
impl QuoteRepository for InMemoryStore {
    async fn insert(&self, quote: &NewQuoteRequest) -> AppResult<QuoteRequest> {
        self.check_writable()?;

        let now = Utc::now();
        let stored = QuoteRequest {
            id: Uuid::new_v4(),
            voice_actor_id: quote.voice_actor_id,
            client_name: quote.client_name.clone(),
            client_email: quote.client_email.clone(),
            client_phone: quote.client_phone.clone(),
            script_text: quote.script_text.clone(),
            word_count: quote.word_count,
            revisions_requested: quote.revisions_requested,
            express_delivery: quote.express_delivery,
            background_music: quote.background_music,
            sound_effects: quote.sound_effects,
            estimated_price: quote.estimated_price,
            delivery_time: quote.delivery_time.clone(),
            special_requirements: quote.special_requirements.clone(),
            status: QuoteStatus::Pending,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        };

        self.state.write().quotes.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, status: Option<QuoteStatus>) -> AppResult<Vec<QuoteRequest>> {
        Ok(self
            .state
            .read()
            .quotes
            .iter()
            .rev()
            .filter(|q| status.map_or(true, |s| q.status == s))
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: QuoteStatus,
        admin_notes: Option<&str>,
    ) -> AppResult<Option<QuoteRequest>> {
        let mut state = self.state.write();
        Ok(state.quotes.iter_mut().find(|q| q.id == id).map(|quote| {
            quote.status = status;
            if let Some(notes) = admin_notes {
                quote.admin_notes = Some(notes.to_string());
            }
            quote.updated_at = Utc::now();
            quote.clone()
        }))
    }

    async fn counts(&self) -> AppResult<QuoteCounts> {
        let state = self.state.read();
        Ok(QuoteCounts {
            total: state.quotes.len() as i64,
            pending: state
                .quotes
                .iter()
                .filter(|q| q.status == QuoteStatus::Pending)
                .count() as i64,
        })
    }
}

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn insert(&self, submission: &NewContactSubmission) -> AppResult<ContactSubmission> {
        self.check_writable()?;

        let now = Utc::now();
        let stored = ContactSubmission {
            id: Uuid::new_v4(),
            name: submission.name.clone(),
            email: submission.email.clone(),
            subject: submission.subject.clone(),
            message: submission.message.clone(),
            ip_address: submission.ip_address.clone(),
            user_agent: submission.user_agent.clone(),
            status: ContactStatus::New,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        };

        self.state.write().contacts.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, status: Option<ContactStatus>) -> AppResult<Vec<ContactSubmission>> {
        Ok(self
            .state
            .read()
            .contacts
            .iter()
            .rev()
            .filter(|c| status.map_or(true, |s| c.status == s))
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ContactStatus,
        admin_notes: Option<&str>,
    ) -> AppResult<Option<ContactSubmission>> {
        let mut state = self.state.write();
        Ok(state.contacts.iter_mut().find(|c| c.id == id).map(|contact| {
            contact.status = status;
            if let Some(notes) = admin_notes {
                contact.admin_notes = Some(notes.to_string());
            }
            contact.updated_at = Utc::now();
            contact.clone()
        }))
    }

    async fn counts(&self) -> AppResult<ContactCounts> {
        let state = self.state.read();
        Ok(ContactCounts {
            total: state.contacts.len() as i64,
            new: state
                .contacts
                .iter()
                .filter(|c| c.status == ContactStatus::New)
                .count() as i64,
        })
    }
}

#[async_trait]
impl DatabaseProbe for InMemoryStore {
    async fn is_reachable(&self) -> bool {
        !self.database_down.load(Ordering::SeqCst)
    }
}
