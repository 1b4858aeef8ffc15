use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::ContactStatus;

/// Body for POST /api/contact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactSubmittedResponse {
    pub id: Uuid,
    pub status: ContactStatus,
}

/// Query for GET /admin/contacts
#[derive(Debug, Default, Deserialize)]
pub struct ContactListQuery {
    #[serde(default)]
    pub status: Option<ContactStatus>,
}

/// Body for PATCH /admin/contacts/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    pub status: ContactStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
}
