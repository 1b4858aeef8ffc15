use std::sync::Arc;

use super::dto::{EstimateRequest, EstimateResponse};
use super::error::PricingServiceError;
use super::estimator::estimate;
use super::model::ActorRateCard;
use super::RateCardSource;

pub struct PricingService {
    rate_cards: Arc<dyn RateCardSource>,
}

impl PricingService {
    pub fn new(rate_cards: Arc<dyn RateCardSource>) -> Self {
        Self { rate_cards }
    }

    pub async fn rate_card(&self, actor_id: &str) -> Result<ActorRateCard, PricingServiceError> {
        self.rate_cards
            .find_rate_card(actor_id)
            .await
            .map_err(|e| PricingServiceError::Dependency(e.to_string()))?
            .ok_or(PricingServiceError::ActorNotFound)
    }

    /// Price an order against the actor's current rate card
    pub async fn estimate_for_actor(
        &self,
        request: EstimateRequest,
    ) -> Result<EstimateResponse, PricingServiceError> {
        let rate_card = self.rate_card(&request.actor_id).await?;
        let params = request.order.to_parameters()?;

        let estimate = estimate(&rate_card.rate_card, &params).map_err(|e| {
            tracing::warn!(actor_id = %rate_card.actor_id, error = %e, "Estimate rejected");
            e
        })?;

        tracing::debug!(
            actor_id = %rate_card.actor_id,
            word_count = params.word_count,
            total = estimate.total,
            "Estimate computed"
        );

        Ok(EstimateResponse::new(&rate_card, &params, estimate))
    }
}
