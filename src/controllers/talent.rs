use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::talent::{TalentProfileResponse, TalentQuery, TalentService, TalentSummaryResponse},
    error::AppResult,
};

pub struct TalentController {
    talent_service: Arc<TalentService>,
}

impl TalentController {
    pub fn new(talent_service: Arc<TalentService>) -> Self {
        Self { talent_service }
    }

    /// GET /api/talents - Browse the catalogue
    pub async fn list_talents(
        State(controller): State<Arc<TalentController>>,
        Query(query): Query<TalentQuery>,
    ) -> AppResult<Json<Vec<TalentSummaryResponse>>> {
        let talents = controller.talent_service.list_talents(query).await?;
        Ok(Json(talents))
    }

    /// GET /api/talents/featured
    pub async fn featured_talents(
        State(controller): State<Arc<TalentController>>,
    ) -> AppResult<Json<Vec<TalentSummaryResponse>>> {
        let talents = controller.talent_service.featured_talents().await?;
        Ok(Json(talents))
    }

    /// GET /api/talents/{actorId}
    pub async fn get_talent(
        State(controller): State<Arc<TalentController>>,
        Path(actor_id): Path<String>,
    ) -> AppResult<Json<TalentProfileResponse>> {
        let talent = controller.talent_service.get_talent(&actor_id).await?;
        Ok(Json(talent))
    }
}
