use std::sync::Arc;

use super::dto::DashboardStats;
use crate::error::AppResult;
use crate::infrastructure::repositories::{ContactRepository, QuoteRepository, VoiceActorRepository};

/// Back-office dashboard figures
pub struct AdminService {
    quote_repo: Arc<dyn QuoteRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    actor_repo: Arc<dyn VoiceActorRepository>,
}

impl AdminService {
    pub fn new(
        quote_repo: Arc<dyn QuoteRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        actor_repo: Arc<dyn VoiceActorRepository>,
    ) -> Self {
        Self {
            quote_repo,
            contact_repo,
            actor_repo,
        }
    }

    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let (quotes, contacts, actors) = tokio::try_join!(
            self.quote_repo.counts(),
            self.contact_repo.counts(),
            self.actor_repo.count_actors(),
        )?;

        Ok(DashboardStats::new(quotes, contacts, actors))
    }
}
