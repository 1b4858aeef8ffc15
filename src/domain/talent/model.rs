use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::pricing::RateCard;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct VoiceActor {
    pub id: Uuid,
    /// Public catalogue code, numeric by convention ("1", "2", ... "47")
    pub actor_id: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    pub gradient_colors: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub turnaround_time: Option<String>,
    pub rating: Option<Decimal>,
    pub review_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AudioSample {
    pub id: Uuid,
    pub voice_actor_id: Uuid,
    pub sample_id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub audio_url: String,
    pub content_type: Option<String>,
    pub duration_seconds: Option<i32>,
    pub file_size_bytes: Option<i64>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A voice actor together with pricing and samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    #[serde(flatten)]
    pub actor: VoiceActor,
    pub rate_card: Option<RateCard>,
    pub samples: Vec<AudioSample>,
}

impl Talent {
    pub fn starting_price(&self) -> Option<Decimal> {
        self.rate_card.as_ref().map(RateCard::starting_price)
    }

    pub fn display_name(&self) -> String {
        self.actor
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Actor {}", self.actor.actor_id))
    }

    /// Active samples in playback order
    pub fn active_samples(&self) -> Vec<&AudioSample> {
        let mut samples: Vec<&AudioSample> = self.samples.iter().filter(|s| s.is_active).collect();
        samples.sort_by_key(|s| s.order_index);
        samples
    }
}

/// Actor totals for the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorCounts {
    pub total: i64,
    pub active: i64,
    pub featured: i64,
}
