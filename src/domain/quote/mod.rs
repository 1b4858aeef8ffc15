pub mod dto;
pub mod error;
pub mod model;
pub mod payload;
pub mod service;

pub use dto::{QuoteListQuery, QuoteSubmittedResponse, SubmitQuoteRequest, UpdateQuoteRequest};
pub use error::QuoteServiceError;
pub use model::{ClientContact, NewQuoteRequest, QuoteCounts, QuoteRequest, QuoteStatus};
pub use payload::build_quote_payload;
pub use service::QuoteService;
