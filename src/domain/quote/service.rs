use std::sync::Arc;
use uuid::Uuid;

use super::dto::{QuoteSubmittedResponse, SubmitQuoteRequest, UpdateQuoteRequest};
use super::error::QuoteServiceError;
use super::model::{QuoteRequest, QuoteStatus};
use super::payload::build_quote_payload;
use crate::domain::pricing::{estimate, PricingService};
use crate::domain::shared::non_blank;
use crate::infrastructure::repositories::QuoteRepository;

pub struct QuoteService {
    pricing: Arc<PricingService>,
    quote_repo: Arc<dyn QuoteRepository>,
}

impl QuoteService {
    pub fn new(pricing: Arc<PricingService>, quote_repo: Arc<dyn QuoteRepository>) -> Self {
        Self {
            pricing,
            quote_repo,
        }
    }

    /// Price the order against the actor's current rate card and store the request
    pub async fn submit_quote(
        &self,
        request: SubmitQuoteRequest,
    ) -> Result<QuoteSubmittedResponse, QuoteServiceError> {
        let rate_card = self.pricing.rate_card(&request.actor_id).await?;
        // The stored script, word count and price must agree, so the count
        // always comes from the script
        if let Some(claimed) = request.order.word_count {
            tracing::debug!(
                actor_id = %rate_card.actor_id,
                claimed,
                "Ignoring client word_count on quote"
            );
        }
        let params = request.order.script_parameters()?;
        let estimate = estimate(&rate_card.rate_card, &params)?;

        let payload = build_quote_payload(
            rate_card.voice_actor_id,
            &request.contact(),
            &params,
            &estimate,
            request.special_requirements.as_deref(),
        )?;

        let quote = self.quote_repo.insert(&payload).await.map_err(|e| {
            tracing::error!(actor_id = %rate_card.actor_id, error = %e, "Failed to store quote request");
            QuoteServiceError::Sink(e.to_string())
        })?;

        tracing::info!(
            quote_id = %quote.id,
            actor_id = %rate_card.actor_id,
            word_count = params.word_count,
            estimated_price = estimate.total,
            "Quote request submitted"
        );

        Ok(QuoteSubmittedResponse {
            id: quote.id,
            estimated_price: quote.estimated_price,
            delivery_time: estimate.delivery_time,
            status: quote.status,
        })
    }

    pub async fn list_quotes(
        &self,
        status: Option<QuoteStatus>,
    ) -> Result<Vec<QuoteRequest>, QuoteServiceError> {
        Ok(self.quote_repo.list(status).await?)
    }

    pub async fn update_quote(
        &self,
        id: Uuid,
        update: UpdateQuoteRequest,
    ) -> Result<QuoteRequest, QuoteServiceError> {
        let notes = non_blank(update.admin_notes.as_deref());

        let quote = self
            .quote_repo
            .update_status(id, update.status, notes.as_deref())
            .await?
            .ok_or(QuoteServiceError::NotFound)?;

        tracing::info!(quote_id = %id, status = %quote.status, "Quote request updated");
        Ok(quote)
    }
}
