use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::error::PricingError;
use super::word_counter::count_words;

/// Upper bound of the revisions slider offered to clients
pub const MAX_REVISIONS: u32 = 5;

/// Per-actor pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RateCard {
    pub is_fixed_price: bool,
    pub fixed_price_amount: Option<Decimal>,
    pub base_price: Decimal,
    pub price_per_word: Decimal,
    pub revision_fee: Decimal,
    pub express_delivery_fee: Decimal,
    pub background_music_fee: Decimal,
    pub sound_effects_fee: Decimal,
    pub min_order: Decimal,
}

impl RateCard {
    /// Price shown in listings: the flat amount for fixed-price actors, the base price otherwise
    pub fn starting_price(&self) -> Decimal {
        match (self.is_fixed_price, self.fixed_price_amount) {
            (true, Some(amount)) => amount,
            _ => self.base_price,
        }
    }

    /// Check the card can be used for an estimate
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.is_fixed_price && self.fixed_price_amount.is_none() {
            return Err(PricingError::Configuration(
                "fixed-price rate card has no fixed price amount".to_string(),
            ));
        }

        let amounts = [
            ("fixed_price_amount", self.fixed_price_amount.unwrap_or_default()),
            ("base_price", self.base_price),
            ("price_per_word", self.price_per_word),
            ("revision_fee", self.revision_fee),
            ("express_delivery_fee", self.express_delivery_fee),
            ("background_music_fee", self.background_music_fee),
            ("sound_effects_fee", self.sound_effects_fee),
            ("min_order", self.min_order),
        ];

        if let Some((name, _)) = amounts.iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(PricingError::Configuration(format!(
                "{} cannot be negative",
                name
            )));
        }

        Ok(())
    }
}

/// Rate card resolved for a specific actor
#[derive(Debug, Clone, PartialEq)]
pub struct ActorRateCard {
    pub voice_actor_id: Uuid,
    pub actor_id: String,
    pub rate_card: RateCard,
}

/// Client choices for a single estimate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderParameters {
    pub script_text: String,
    pub word_count: u32,
    pub revisions: u32,
    pub express_delivery: bool,
    pub background_music: bool,
    pub sound_effects: bool,
}

impl OrderParameters {
    pub fn from_script(script_text: impl Into<String>) -> Self {
        let script_text = script_text.into();
        let word_count = u32::try_from(count_words(&script_text)).unwrap_or(u32::MAX);

        Self {
            script_text,
            word_count,
            ..Self::default()
        }
    }

    /// Override the derived word count
    pub fn with_word_count(mut self, word_count: i64) -> Result<Self, PricingError> {
        self.word_count = u32::try_from(word_count).map_err(|_| PricingError::Validation {
            field: "word_count",
            message: format!("must be a non-negative integer, got {}", word_count),
        })?;
        Ok(self)
    }

    pub fn with_revisions(mut self, revisions: i64) -> Result<Self, PricingError> {
        if !(0..=i64::from(MAX_REVISIONS)).contains(&revisions) {
            return Err(PricingError::Validation {
                field: "revisions",
                message: format!("must be between 0 and {}, got {}", MAX_REVISIONS, revisions),
            });
        }
        self.revisions = revisions as u32;
        Ok(self)
    }

    pub fn with_express_delivery(mut self, enabled: bool) -> Self {
        self.express_delivery = enabled;
        self
    }

    pub fn with_background_music(mut self, enabled: bool) -> Self {
        self.background_music = enabled;
        self
    }

    pub fn with_sound_effects(mut self, enabled: bool) -> Self {
        self.sound_effects = enabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryTime {
    #[serde(rename = "48 hours")]
    Standard,
    #[serde(rename = "24 hours")]
    Express,
}

impl DeliveryTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryTime::Standard => "48 hours",
            DeliveryTime::Express => "24 hours",
        }
    }
}

impl std::fmt::Display for DeliveryTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    FixedPrice,
    BasePrice,
    Words,
    Revisions,
    ExpressDelivery,
    BackgroundMusic,
    SoundEffects,
}

/// One itemized contribution to an estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind: LineItemKind,
    pub label: String,
    pub amount: Decimal,
}

impl LineItem {
    /// Amount rounded to whole currency units for presentation
    pub fn display_amount(&self) -> Decimal {
        round_half_up(self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub total: i64,
    pub subtotal: Decimal,
    pub minimum_order_applied: bool,
    pub delivery_time: DeliveryTime,
    pub breakdown: Vec<LineItem>,
}

pub(crate) fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
