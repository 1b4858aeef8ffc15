use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::directory::{ActorStatusFilter, SortBy, TalentFilter};
use super::model::{AudioSample, Talent};
use crate::domain::pricing::RateCard;

const DEFAULT_GRADIENT: &str = "from-orange-500 to-cyan-600";

/// Query for GET /api/talents
#[derive(Debug, Default, Deserialize)]
pub struct TalentQuery {
    /// Comma-separated
    #[serde(default)]
    pub languages: Option<String>,
    /// Comma-separated
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub sort: Option<SortBy>,
}

fn split_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

impl From<TalentQuery> for TalentFilter {
    fn from(query: TalentQuery) -> Self {
        Self {
            languages: split_list(query.languages),
            tags: split_list(query.tags),
            search: query.q,
            min_price: query.min_price,
            max_price: query.max_price,
            sort: query.sort.unwrap_or_default(),
        }
    }
}

/// Query for GET /admin/actors
#[derive(Debug, Default, Deserialize)]
pub struct AdminActorQuery {
    #[serde(default)]
    pub status: Option<ActorStatusFilter>,
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AudioSampleResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
}

impl From<&AudioSample> for AudioSampleResponse {
    fn from(sample: &AudioSample) -> Self {
        Self {
            id: sample.sample_id.clone(),
            name: sample.name.clone(),
            category: sample.category.clone(),
            description: sample.description.clone(),
            url: sample.audio_url.clone(),
            duration_seconds: sample.duration_seconds,
        }
    }
}

/// Catalogue card for listings
#[derive(Debug, Serialize, Deserialize)]
pub struct TalentSummaryResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub image: String,
    pub gradient: String,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnaround_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed_price: Option<bool>,
    pub samples: Vec<AudioSampleResponse>,
}

impl From<&Talent> for TalentSummaryResponse {
    fn from(talent: &Talent) -> Self {
        let actor = &talent.actor;
        Self {
            id: actor.actor_id.clone(),
            name: talent.display_name(),
            title: actor.title.clone(),
            image: actor
                .image_url
                .clone()
                .unwrap_or_else(|| format!("/photos/{}.jpg", actor.actor_id)),
            gradient: actor
                .gradient_colors
                .clone()
                .unwrap_or_else(|| DEFAULT_GRADIENT.to_string()),
            languages: actor.languages.clone(),
            tags: actor.tags.clone(),
            is_featured: actor.is_featured,
            rating: actor.rating,
            review_count: actor.review_count,
            turnaround_time: actor.turnaround_time.clone(),
            starting_price: talent.starting_price(),
            is_fixed_price: talent.rate_card.as_ref().map(|c| c.is_fixed_price),
            samples: talent
                .active_samples()
                .into_iter()
                .map(AudioSampleResponse::from)
                .collect(),
        }
    }
}

/// Full profile for GET /api/talents/:actorId
#[derive(Debug, Serialize, Deserialize)]
pub struct TalentProfileResponse {
    #[serde(flatten)]
    pub summary: TalentSummaryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<RateCard>,
}

impl From<&Talent> for TalentProfileResponse {
    fn from(talent: &Talent) -> Self {
        Self {
            summary: TalentSummaryResponse::from(talent),
            bio: talent.actor.bio.clone(),
            cover_image: talent.actor.cover_image_url.clone(),
            pricing: talent.rate_card.clone(),
        }
    }
}

/// Body for POST /admin/actors and PUT /admin/actors/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceActorInput {
    pub actor_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub gradient_colors: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub turnaround_time: Option<String>,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub review_count: Option<i32>,
}

/// Body for POST /admin/actors/:id/samples and PUT /admin/samples/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSampleInput {
    pub sample_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub audio_url: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub file_size_bytes: Option<i64>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
