use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PricingError;
use super::model::{ActorRateCard, DeliveryTime, LineItem, LineItemKind, OrderParameters, PriceEstimate, RateCard};

/// Order inputs shared by the estimate and quote endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderOptions {
    #[serde(default)]
    pub script_text: String,
    /// Overrides the count derived from `script_text` on estimates; quotes ignore it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default)]
    pub revisions: i64,
    #[serde(default)]
    pub express_delivery: bool,
    #[serde(default)]
    pub background_music: bool,
    #[serde(default)]
    pub sound_effects: bool,
}

impl OrderOptions {
    /// Parameters with the word count always derived from `script_text`
    pub fn script_parameters(&self) -> Result<OrderParameters, PricingError> {
        Ok(OrderParameters::from_script(self.script_text.clone())
            .with_revisions(self.revisions)?
            .with_express_delivery(self.express_delivery)
            .with_background_music(self.background_music)
            .with_sound_effects(self.sound_effects))
    }

    /// Parameters honouring an explicit `word_count`, for estimates made before a script exists
    pub fn to_parameters(&self) -> Result<OrderParameters, PricingError> {
        let params = self.script_parameters()?;

        match self.word_count {
            Some(word_count) => params.with_word_count(word_count),
            None => Ok(params),
        }
    }
}

/// Request for POST /api/pricing/estimate
#[derive(Debug, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub actor_id: String,
    #[serde(flatten)]
    pub order: OrderOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineItemResponse {
    pub kind: LineItemKind,
    pub label: String,
    pub amount: Decimal,
    pub display_amount: Decimal,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            display_amount: item.display_amount(),
            kind: item.kind,
            label: item.label,
            amount: item.amount,
        }
    }
}

/// Response for POST /api/pricing/estimate
#[derive(Debug, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub actor_id: String,
    pub word_count: u32,
    pub revisions: u32,
    pub total: i64,
    pub subtotal: Decimal,
    pub minimum_order: Decimal,
    pub minimum_order_applied: bool,
    pub delivery_time: DeliveryTime,
    pub breakdown: Vec<LineItemResponse>,
}

impl EstimateResponse {
    pub fn new(rate_card: &ActorRateCard, params: &OrderParameters, estimate: PriceEstimate) -> Self {
        Self {
            actor_id: rate_card.actor_id.clone(),
            word_count: params.word_count,
            revisions: params.revisions,
            total: estimate.total,
            subtotal: estimate.subtotal,
            minimum_order: rate_card.rate_card.min_order,
            minimum_order_applied: estimate.minimum_order_applied,
            delivery_time: estimate.delivery_time,
            breakdown: estimate.breakdown.into_iter().map(LineItemResponse::from).collect(),
        }
    }
}

/// Response for GET /api/talents/:actorId/pricing
#[derive(Debug, Serialize, Deserialize)]
pub struct RateCardResponse {
    pub actor_id: String,
    pub starting_price: Decimal,
    #[serde(flatten)]
    pub rate_card: RateCard,
}

impl From<ActorRateCard> for RateCardResponse {
    fn from(card: ActorRateCard) -> Self {
        Self {
            actor_id: card.actor_id,
            starting_price: card.rate_card.starting_price(),
            rate_card: card.rate_card,
        }
    }
}
