use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ContactServiceError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("contact submission not found")]
    NotFound,
    #[error("could not save contact submission: {0}")]
    Sink(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ContactServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ContactServiceError::Invalid(msg),
            AppError::NotFound(_) => ContactServiceError::NotFound,
            _ => ContactServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ContactServiceError> for AppError {
    fn from(err: ContactServiceError) -> Self {
        match err {
            ContactServiceError::MissingFields(_) | ContactServiceError::Invalid(_) => {
                AppError::BadRequest(err.to_string())
            }
            ContactServiceError::NotFound => {
                AppError::NotFound("Contact submission not found".to_string())
            }
            ContactServiceError::Sink(_) => AppError::ExternalService(
                "Failed to send message. Please try again.".to_string(),
            ),
            ContactServiceError::Dependency(msg) => AppError::Internal(msg),
            ContactServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
