pub mod dto;
pub mod error;
pub mod estimator;
pub mod model;
pub mod service;
pub mod word_counter;

use async_trait::async_trait;

use crate::error::AppResult;

pub use dto::{EstimateRequest, EstimateResponse, OrderOptions, RateCardResponse};
pub use error::{PricingError, PricingServiceError};
pub use estimator::estimate;
pub use model::{
    ActorRateCard, DeliveryTime, LineItem, LineItemKind, OrderParameters, PriceEstimate,
    RateCard, MAX_REVISIONS,
};
pub use service::PricingService;
pub use word_counter::count_words;

/// Supplies the rate card of an active voice actor, looked up by public actor id
#[async_trait]
pub trait RateCardSource: Send + Sync {
    async fn find_rate_card(&self, actor_id: &str) -> AppResult<Option<ActorRateCard>>;
}
