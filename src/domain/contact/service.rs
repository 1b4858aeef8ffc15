use std::sync::Arc;
use uuid::Uuid;

use super::dto::{ContactSubmittedResponse, SubmitContactRequest, UpdateContactRequest};
use super::error::ContactServiceError;
use super::model::{
    ContactMetadata, ContactStatus, ContactSubmission, NewContactSubmission, CONTACT_SUBJECTS,
};
use crate::domain::shared::{is_valid_email, non_blank};
use crate::infrastructure::repositories::ContactRepository;

pub struct ContactService {
    contact_repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    pub async fn submit_contact(
        &self,
        request: SubmitContactRequest,
        metadata: ContactMetadata,
    ) -> Result<ContactSubmittedResponse, ContactServiceError> {
        let submission = validate_submission(&request, metadata)?;

        let stored = self.contact_repo.insert(&submission).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to store contact submission");
            ContactServiceError::Sink(e.to_string())
        })?;

        tracing::info!(
            contact_id = %stored.id,
            subject = %stored.subject,
            "Contact submission received"
        );

        Ok(ContactSubmittedResponse {
            id: stored.id,
            status: stored.status,
        })
    }

    pub async fn list_contacts(
        &self,
        status: Option<ContactStatus>,
    ) -> Result<Vec<ContactSubmission>, ContactServiceError> {
        Ok(self.contact_repo.list(status).await?)
    }

    pub async fn update_contact(
        &self,
        id: Uuid,
        update: UpdateContactRequest,
    ) -> Result<ContactSubmission, ContactServiceError> {
        let notes = non_blank(update.admin_notes.as_deref());

        let contact = self
            .contact_repo
            .update_status(id, update.status, notes.as_deref())
            .await?
            .ok_or(ContactServiceError::NotFound)?;

        tracing::info!(contact_id = %id, status = %contact.status, "Contact submission updated");
        Ok(contact)
    }
}

fn validate_submission(
    request: &SubmitContactRequest,
    metadata: ContactMetadata,
) -> Result<NewContactSubmission, ContactServiceError> {
    let name = request.name.trim();
    let email = request.email.trim();
    let subject = request.subject.trim().to_lowercase();
    let message = request.message.trim();

    let missing: Vec<&'static str> = [
        ("name", name.is_empty()),
        ("email", email.is_empty()),
        ("subject", subject.is_empty()),
        ("message", message.is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, is_missing)| is_missing.then_some(field))
    .collect();

    if !missing.is_empty() {
        return Err(ContactServiceError::MissingFields(missing));
    }

    if !is_valid_email(email) {
        return Err(ContactServiceError::Invalid(
            "email: must be a valid email address".to_string(),
        ));
    }

    if !CONTACT_SUBJECTS.contains(&subject.as_str()) {
        return Err(ContactServiceError::Invalid(format!(
            "subject: must be one of {}",
            CONTACT_SUBJECTS.join(", ")
        )));
    }

    Ok(NewContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        subject,
        message: message.to_string(),
        ip_address: metadata.ip_address,
        user_agent: metadata.user_agent,
    })
}
