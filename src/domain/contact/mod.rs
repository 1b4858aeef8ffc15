pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{ContactListQuery, ContactSubmittedResponse, SubmitContactRequest, UpdateContactRequest};
pub use error::ContactServiceError;
pub use model::{
    ContactCounts, ContactMetadata, ContactStatus, ContactSubmission, NewContactSubmission,
    CONTACT_SUBJECTS,
};
pub use service::ContactService;
