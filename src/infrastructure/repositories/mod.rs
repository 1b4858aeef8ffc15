pub mod contact_repository;
pub mod quote_repository;
pub mod voice_actor_repository;

pub use contact_repository::{ContactRepository, PgContactRepository};
pub use quote_repository::{PgQuoteRepository, QuoteRepository};
pub use voice_actor_repository::{PgVoiceActorRepository, VoiceActorRepository};
