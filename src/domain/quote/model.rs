use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::InProgress => "in_progress",
            QuoteStatus::Completed => "completed",
            QuoteStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is asking for the quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// A validated quote request ready to be stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuoteRequest {
    pub voice_actor_id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub script_text: String,
    pub word_count: i32,
    pub revisions_requested: i32,
    pub express_delivery: bool,
    pub background_music: bool,
    pub sound_effects: bool,
    pub estimated_price: i64,
    pub delivery_time: String,
    pub special_requirements: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub voice_actor_id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub script_text: String,
    pub word_count: i32,
    pub revisions_requested: i32,
    pub express_delivery: bool,
    pub background_music: bool,
    pub sound_effects: bool,
    pub estimated_price: i64,
    pub delivery_time: String,
    pub special_requirements: Option<String>,
    pub status: QuoteStatus,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCounts {
    pub total: i64,
    pub pending: i64,
}
