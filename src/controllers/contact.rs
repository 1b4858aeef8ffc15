use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::contact::{
        ContactListQuery, ContactMetadata, ContactService, ContactSubmission,
        ContactSubmittedResponse, SubmitContactRequest, UpdateContactRequest,
    },
    error::AppResult,
};

pub struct ContactController {
    contact_service: Arc<ContactService>,
}

impl ContactController {
    pub fn new(contact_service: Arc<ContactService>) -> Self {
        Self { contact_service }
    }

    /// POST /api/contact - Send a message from the contact form
    pub async fn submit_contact(
        State(controller): State<Arc<ContactController>>,
        headers: HeaderMap,
        Json(request): Json<SubmitContactRequest>,
    ) -> AppResult<(StatusCode, Json<ContactSubmittedResponse>)> {
        let submitted = controller
            .contact_service
            .submit_contact(request, request_metadata(&headers))
            .await?;
        Ok((StatusCode::CREATED, Json(submitted)))
    }

    /// GET /admin/contacts
    pub async fn list_contacts(
        State(controller): State<Arc<ContactController>>,
        Query(query): Query<ContactListQuery>,
    ) -> AppResult<Json<Vec<ContactSubmission>>> {
        let contacts = controller.contact_service.list_contacts(query.status).await?;
        Ok(Json(contacts))
    }

    /// PATCH /admin/contacts/{id}
    pub async fn update_contact(
        State(controller): State<Arc<ContactController>>,
        Path(id): Path<Uuid>,
        Json(request): Json<UpdateContactRequest>,
    ) -> AppResult<Json<ContactSubmission>> {
        let contact = controller.contact_service.update_contact(id, request).await?;
        Ok(Json(contact))
    }
}

/// Client address from the first `x-forwarded-for` hop, plus the user agent
fn request_metadata(headers: &HeaderMap) -> ContactMetadata {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    ContactMetadata {
        ip_address: header("x-forwarded-for")
            .and_then(|v| v.split(',').next())
            .map(|ip| ip.trim().to_string())
            .or_else(|| header("x-real-ip").map(String::from)),
        user_agent: header("user-agent").map(String::from),
    }
}
