use serde::{Deserialize, Serialize};

use crate::domain::contact::ContactCounts;
use crate::domain::quote::QuoteCounts;
use crate::domain::talent::ActorCounts;

/// Response for GET /admin/stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_quotes: i64,
    pub pending_quotes: i64,
    pub total_contacts: i64,
    pub new_contacts: i64,
    pub total_actors: i64,
    pub active_actors: i64,
    pub featured_actors: i64,
}

impl DashboardStats {
    pub fn new(quotes: QuoteCounts, contacts: ContactCounts, actors: ActorCounts) -> Self {
        Self {
            total_quotes: quotes.total,
            pending_quotes: quotes.pending,
            total_contacts: contacts.total,
            new_contacts: contacts.new,
            total_actors: actors.total,
            active_actors: actors.active,
            featured_actors: actors.featured,
        }
    }
}
