use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::pricing::{EstimateRequest, EstimateResponse, PricingService, RateCardResponse},
    error::AppResult,
};

pub struct PricingController {
    pricing_service: Arc<PricingService>,
}

impl PricingController {
    pub fn new(pricing_service: Arc<PricingService>) -> Self {
        Self { pricing_service }
    }

    /// GET /api/talents/{actorId}/pricing - Rate card of an active actor
    pub async fn get_rate_card(
        State(controller): State<Arc<PricingController>>,
        Path(actor_id): Path<String>,
    ) -> AppResult<Json<RateCardResponse>> {
        let rate_card = controller.pricing_service.rate_card(&actor_id).await?;
        Ok(Json(RateCardResponse::from(rate_card)))
    }

    /// POST /api/pricing/estimate
    pub async fn estimate(
        State(controller): State<Arc<PricingController>>,
        Json(request): Json<EstimateRequest>,
    ) -> AppResult<Json<EstimateResponse>> {
        let estimate = controller.pricing_service.estimate_for_actor(request).await?;
        Ok(Json(estimate))
    }
}
