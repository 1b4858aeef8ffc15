use crate::domain::pricing::{PricingError, PricingServiceError};
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum QuoteServiceError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("pricing unavailable: {0}")]
    PricingUnavailable(String),
    #[error("voice actor not found")]
    ActorNotFound,
    #[error("quote request not found")]
    NotFound,
    #[error("could not save quote request: {0}")]
    Sink(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for QuoteServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => QuoteServiceError::Invalid(msg),
            AppError::NotFound(_) => QuoteServiceError::NotFound,
            _ => QuoteServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<PricingError> for QuoteServiceError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::Configuration(msg) => QuoteServiceError::PricingUnavailable(msg),
            PricingError::Validation { field, message } => {
                QuoteServiceError::Invalid(format!("{}: {}", field, message))
            }
        }
    }
}

impl From<PricingServiceError> for QuoteServiceError {
    fn from(err: PricingServiceError) -> Self {
        match err {
            PricingServiceError::ActorNotFound => QuoteServiceError::ActorNotFound,
            PricingServiceError::Pricing(e) => e.into(),
            PricingServiceError::Dependency(msg) => QuoteServiceError::Dependency(msg),
            PricingServiceError::Other(e) => QuoteServiceError::Other(e),
        }
    }
}

impl From<QuoteServiceError> for AppError {
    fn from(err: QuoteServiceError) -> Self {
        match err {
            QuoteServiceError::MissingFields(_) | QuoteServiceError::Invalid(_) => {
                AppError::BadRequest(err.to_string())
            }
            QuoteServiceError::PricingUnavailable(msg) => AppError::PricingUnavailable(msg),
            QuoteServiceError::ActorNotFound => {
                AppError::NotFound("Voice actor not found".to_string())
            }
            QuoteServiceError::NotFound => {
                AppError::NotFound("Quote request not found".to_string())
            }
            QuoteServiceError::Sink(_) => AppError::ExternalService(
                "Failed to submit quote request. Please try again.".to_string(),
            ),
            QuoteServiceError::Dependency(msg) => AppError::Internal(msg),
            QuoteServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
