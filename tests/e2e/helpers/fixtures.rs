use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use voicecast_backend::domain::pricing::RateCard;
use voicecast_backend::domain::talent::{AudioSample, AudioSampleInput, VoiceActor, VoiceActorInput};
use voicecast_backend::infrastructure::repositories::VoiceActorRepository;

/// Seeds actors straight through a repository, bypassing the admin API
pub struct TestFixtures {
    store: Arc<dyn VoiceActorRepository>,
}

/// 40 base, 0.08 per word, 12 per revision, 30 express, 20 music, 25 effects, 30 minimum
pub fn standard_rate_card() -> RateCard {
    RateCard {
        is_fixed_price: false,
        fixed_price_amount: None,
        base_price: dec!(40),
        price_per_word: dec!(0.08),
        revision_fee: dec!(12),
        express_delivery_fee: dec!(30),
        background_music_fee: dec!(20),
        sound_effects_fee: dec!(25),
        min_order: dec!(30),
    }
}

pub fn fixed_rate_card(amount: Decimal) -> RateCard {
    RateCard {
        is_fixed_price: true,
        fixed_price_amount: Some(amount),
        ..standard_rate_card()
    }
}

pub fn actor_input(actor_id: &str, name: &str) -> VoiceActorInput {
    VoiceActorInput {
        actor_id: actor_id.to_string(),
        name: Some(name.to_string()),
        title: Some("Voice Actor".to_string()),
        bio: None,
        image_url: None,
        cover_image_url: None,
        languages: vec!["English".to_string()],
        tags: Vec::new(),
        gradient_colors: None,
        is_featured: false,
        is_active: true,
        turnaround_time: Some("48 hours".to_string()),
        rating: None,
        review_count: None,
    }
}

pub fn sample_input(sample_id: &str, order_index: i32) -> AudioSampleInput {
    AudioSampleInput {
        sample_id: sample_id.to_string(),
        name: format!("Sample {}", sample_id),
        category: Some("commercial".to_string()),
        description: None,
        audio_url: format!("/audio/{}.mp3", sample_id),
        content_type: Some("audio/mpeg".to_string()),
        duration_seconds: Some(30),
        file_size_bytes: Some(512_000),
        order_index,
        is_active: true,
    }
}

impl TestFixtures {
    pub fn new(store: Arc<dyn VoiceActorRepository>) -> Self {
        Self { store }
    }

    pub async fn create_actor_from(&self, input: VoiceActorInput) -> Result<VoiceActor> {
        Ok(self.store.create(&input).await?)
    }

    /// Active actor priced with the standard rate card
    pub async fn create_priced_actor(&self, actor_id: &str, name: &str) -> Result<VoiceActor> {
        let actor = self.create_actor_from(actor_input(actor_id, name)).await?;
        self.set_rate_card(&actor, standard_rate_card()).await?;
        Ok(actor)
    }

    pub async fn set_rate_card(&self, actor: &VoiceActor, rate_card: RateCard) -> Result<()> {
        Ok(self.store.upsert_rate_card(actor.id, &rate_card).await?)
    }

    pub async fn add_sample(&self, actor: &VoiceActor, input: AudioSampleInput) -> Result<AudioSample> {
        Ok(self.store.create_sample(actor.id, &input).await?)
    }
}
