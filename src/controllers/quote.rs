use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::quote::{
        QuoteListQuery, QuoteRequest, QuoteService, QuoteSubmittedResponse, SubmitQuoteRequest,
        UpdateQuoteRequest,
    },
    error::AppResult,
};

pub struct QuoteController {
    quote_service: Arc<QuoteService>,
}

impl QuoteController {
    pub fn new(quote_service: Arc<QuoteService>) -> Self {
        Self { quote_service }
    }

    /// POST /api/quotes - Submit a quote request
    pub async fn submit_quote(
        State(controller): State<Arc<QuoteController>>,
        Json(request): Json<SubmitQuoteRequest>,
    ) -> AppResult<(StatusCode, Json<QuoteSubmittedResponse>)> {
        let submitted = controller.quote_service.submit_quote(request).await?;
        Ok((StatusCode::CREATED, Json(submitted)))
    }

    /// GET /admin/quotes
    pub async fn list_quotes(
        State(controller): State<Arc<QuoteController>>,
        Query(query): Query<QuoteListQuery>,
    ) -> AppResult<Json<Vec<QuoteRequest>>> {
        let quotes = controller.quote_service.list_quotes(query.status).await?;
        Ok(Json(quotes))
    }

    /// PATCH /admin/quotes/{id}
    pub async fn update_quote(
        State(controller): State<Arc<QuoteController>>,
        Path(id): Path<Uuid>,
        Json(request): Json<UpdateQuoteRequest>,
    ) -> AppResult<Json<QuoteRequest>> {
        let quote = controller.quote_service.update_quote(id, request).await?;
        Ok(Json(quote))
    }
}
