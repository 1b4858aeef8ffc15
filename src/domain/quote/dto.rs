use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{ClientContact, QuoteStatus};
use crate::domain::pricing::{DeliveryTime, OrderOptions};

/// Body for POST /api/quotes. Prices sent by the client are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuoteRequest {
    pub actor_id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_phone: Option<String>,
    #[serde(flatten)]
    pub order: OrderOptions,
    #[serde(default)]
    pub special_requirements: Option<String>,
}

impl SubmitQuoteRequest {
    pub fn contact(&self) -> ClientContact {
        ClientContact {
            name: self.client_name.clone(),
            email: self.client_email.clone(),
            phone: self.client_phone.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteSubmittedResponse {
    pub id: Uuid,
    pub estimated_price: i64,
    pub delivery_time: DeliveryTime,
    pub status: QuoteStatus,
}

/// Query for GET /admin/quotes
#[derive(Debug, Default, Deserialize)]
pub struct QuoteListQuery {
    #[serde(default)]
    pub status: Option<QuoteStatus>,
}

/// Body for PATCH /admin/quotes/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuoteRequest {
    pub status: QuoteStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
}
