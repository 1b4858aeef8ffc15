pub mod directory;
pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use directory::{ActorStatusFilter, SortBy, TalentFilter};
pub use dto::{
    AdminActorQuery, AudioSampleInput, AudioSampleResponse, TalentProfileResponse, TalentQuery,
    TalentSummaryResponse, VoiceActorInput,
};
pub use error::TalentServiceError;
pub use model::{ActorCounts, AudioSample, Talent, VoiceActor};
pub use service::TalentService;
