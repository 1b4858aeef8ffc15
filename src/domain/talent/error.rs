use crate::domain::pricing::PricingError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TalentServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("voice actor not found")]
    NotFound,
    #[error("audio sample not found")]
    SampleNotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for TalentServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => TalentServiceError::Invalid(msg),
            AppError::NotFound(_) => TalentServiceError::NotFound,
            AppError::Conflict(msg) => TalentServiceError::Conflict(msg),
            _ => TalentServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<PricingError> for TalentServiceError {
    fn from(err: PricingError) -> Self {
        TalentServiceError::Invalid(err.to_string())
    }
}

impl From<TalentServiceError> for AppError {
    fn from(err: TalentServiceError) -> Self {
        match err {
            TalentServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TalentServiceError::NotFound => AppError::NotFound("Voice actor not found".to_string()),
            TalentServiceError::SampleNotFound => {
                AppError::NotFound("Audio sample not found".to_string())
            }
            TalentServiceError::Conflict(msg) => AppError::Conflict(msg),
            TalentServiceError::Dependency(msg) => AppError::Internal(msg),
            TalentServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
