use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// The rate card cannot produce a price
    #[error("pricing configuration error: {0}")]
    Configuration(String),
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PricingServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("voice actor not found")]
    ActorNotFound,
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::Configuration(msg) => AppError::PricingUnavailable(msg),
            PricingError::Validation { field, message } => {
                AppError::BadRequest(format!("{}: {}", field, message))
            }
        }
    }
}

impl From<AppError> for PricingServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => PricingServiceError::ActorNotFound,
            _ => PricingServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<PricingServiceError> for AppError {
    fn from(err: PricingServiceError) -> Self {
        match err {
            PricingServiceError::ActorNotFound => {
                AppError::NotFound("Voice actor not found".to_string())
            }
            PricingServiceError::Pricing(e) => e.into(),
            PricingServiceError::Dependency(msg) => AppError::Internal(msg),
            PricingServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
