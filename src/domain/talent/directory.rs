//! In-memory filtering and ordering of the talent catalogue.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::model::Talent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Catalogue order (numeric actor id)
    #[default]
    Relevance,
    Rating,
    PriceLow,
    PriceHigh,
    Reviews,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TalentFilter {
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: SortBy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorStatusFilter {
    #[default]
    All,
    Active,
    Inactive,
    Featured,
}

/// Order by the numeric value of the actor code so "10" sorts after "9".
/// Non-numeric codes go last, ordered lexically.
pub fn sort_by_actor_number(talents: &mut [Talent]) {
    talents.sort_by(|a, b| actor_number_key(&a.actor.actor_id).cmp(&actor_number_key(&b.actor.actor_id)));
}

fn actor_number_key(actor_id: &str) -> (u64, &str) {
    (actor_id.trim().parse::<u64>().unwrap_or(u64::MAX), actor_id)
}

fn contains_any(haystack: &[String], needles: &[String]) -> bool {
    needles
        .iter()
        .any(|needle| haystack.iter().any(|value| value.eq_ignore_ascii_case(needle)))
}

fn matches_search(talent: &Talent, term: &str) -> bool {
    let term = term.to_lowercase();
    let actor = &talent.actor;

    actor
        .name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(&term))
        || actor
            .bio
            .as_deref()
            .is_some_and(|bio| bio.to_lowercase().contains(&term))
        || actor.tags.iter().any(|tag| tag.to_lowercase() == term)
}

fn within_price(talent: &Talent, min: Option<Decimal>, max: Option<Decimal>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }

    match talent.starting_price() {
        Some(price) => min.map_or(true, |m| price >= m) && max.map_or(true, |m| price <= m),
        None => false,
    }
}

/// Apply a catalogue filter to talents already in catalogue order.
/// Sorting is stable, so ties keep catalogue order.
pub fn apply(talents: Vec<Talent>, filter: &TalentFilter) -> Vec<Talent> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());

    let mut result: Vec<Talent> = talents
        .into_iter()
        .filter(|t| filter.languages.is_empty() || contains_any(&t.actor.languages, &filter.languages))
        .filter(|t| filter.tags.is_empty() || contains_any(&t.actor.tags, &filter.tags))
        .filter(|t| search.map_or(true, |term| matches_search(t, term)))
        .filter(|t| within_price(t, filter.min_price, filter.max_price))
        .collect();

    match filter.sort {
        SortBy::Relevance => {}
        SortBy::Rating => result.sort_by(|a, b| descending_optional(a.actor.rating, b.actor.rating)),
        SortBy::Reviews => {
            result.sort_by(|a, b| descending_optional(a.actor.review_count, b.actor.review_count))
        }
        SortBy::PriceLow => result.sort_by(|a, b| match (a.starting_price(), b.starting_price()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortBy::PriceHigh => {
            result.sort_by(|a, b| descending_optional(a.starting_price(), b.starting_price()))
        }
    }

    result
}

// Highest first, missing values last
fn descending_optional<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Back-office listing filter: status bucket plus search on name, actor code and bio
pub fn admin_filter(talents: Vec<Talent>, status: ActorStatusFilter, search: Option<&str>) -> Vec<Talent> {
    let term = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    talents
        .into_iter()
        .filter(|t| match status {
            ActorStatusFilter::All => true,
            ActorStatusFilter::Active => t.actor.is_active,
            ActorStatusFilter::Inactive => !t.actor.is_active,
            ActorStatusFilter::Featured => t.actor.is_featured,
        })
        .filter(|t| match &term {
            None => true,
            Some(term) => {
                let actor = &t.actor;
                actor.actor_id.to_lowercase().contains(term)
                    || actor.name.as_deref().unwrap_or_default().to_lowercase().contains(term)
                    || actor.bio.as_deref().unwrap_or_default().to_lowercase().contains(term)
            }
        })
        .collect()
}
