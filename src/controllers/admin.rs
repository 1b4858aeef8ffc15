use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::admin::{AdminService, DashboardStats},
    domain::pricing::RateCard,
    domain::talent::{
        AdminActorQuery, AudioSample, AudioSampleInput, Talent, TalentService, VoiceActor,
        VoiceActorInput,
    },
    error::AppResult,
    infrastructure::auth::AdminUser,
};

/// Back-office catalogue management and dashboard
pub struct AdminController {
    admin_service: Arc<AdminService>,
    talent_service: Arc<TalentService>,
}

impl AdminController {
    pub fn new(admin_service: Arc<AdminService>, talent_service: Arc<TalentService>) -> Self {
        Self {
            admin_service,
            talent_service,
        }
    }

    /// GET /admin/stats
    pub async fn stats(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<Json<DashboardStats>> {
        let stats = controller.admin_service.stats().await?;
        Ok(Json(stats))
    }

    /// GET /admin/actors
    pub async fn list_actors(
        State(controller): State<Arc<AdminController>>,
        Query(query): Query<AdminActorQuery>,
    ) -> AppResult<Json<Vec<Talent>>> {
        let actors = controller.talent_service.list_actors(query).await?;
        Ok(Json(actors))
    }

    /// POST /admin/actors
    pub async fn create_actor(
        State(controller): State<Arc<AdminController>>,
        Extension(admin): Extension<AdminUser>,
        Json(input): Json<VoiceActorInput>,
    ) -> AppResult<(StatusCode, Json<VoiceActor>)> {
        tracing::info!(admin = %admin.email, actor_id = %input.actor_id, "Creating voice actor");
        let actor = controller.talent_service.create_actor(input).await?;
        Ok((StatusCode::CREATED, Json(actor)))
    }

    /// PUT /admin/actors/{id}
    pub async fn update_actor(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
        Json(input): Json<VoiceActorInput>,
    ) -> AppResult<Json<VoiceActor>> {
        let actor = controller.talent_service.update_actor(id, input).await?;
        Ok(Json(actor))
    }

    /// DELETE /admin/actors/{id}
    pub async fn delete_actor(
        State(controller): State<Arc<AdminController>>,
        Extension(admin): Extension<AdminUser>,
        Path(id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        tracing::info!(admin = %admin.email, id = %id, "Deleting voice actor");
        controller.talent_service.delete_actor(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// PUT /admin/actors/{id}/pricing
    pub async fn set_rate_card(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
        Json(rate_card): Json<RateCard>,
    ) -> AppResult<Json<Talent>> {
        let talent = controller.talent_service.set_rate_card(id, rate_card).await?;
        Ok(Json(talent))
    }

    /// POST /admin/actors/{id}/samples
    pub async fn add_sample(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
        Json(input): Json<AudioSampleInput>,
    ) -> AppResult<(StatusCode, Json<AudioSample>)> {
        let sample = controller.talent_service.add_sample(id, input).await?;
        Ok((StatusCode::CREATED, Json(sample)))
    }

    /// PUT /admin/samples/{id}
    pub async fn update_sample(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
        Json(input): Json<AudioSampleInput>,
    ) -> AppResult<Json<AudioSample>> {
        let sample = controller.talent_service.update_sample(id, input).await?;
        Ok(Json(sample))
    }

    /// DELETE /admin/samples/{id}
    pub async fn delete_sample(
        State(controller): State<Arc<AdminController>>,
        Path(id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.talent_service.delete_sample(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
