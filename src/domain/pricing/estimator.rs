use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::PricingError;
use super::model::{
    round_half_up, DeliveryTime, LineItem, LineItemKind, OrderParameters, PriceEstimate,
    RateCard, MAX_REVISIONS,
};

/// Compute the price of a project for one actor.
///
/// All components are summed unrounded, the minimum order is applied to the
/// sum, and only then is the result rounded half-up to whole units. The
/// breakdown lists base/fixed, words, revisions, express, music and effects
/// in that order, omitting lines that do not apply.
pub fn estimate(rate_card: &RateCard, params: &OrderParameters) -> Result<PriceEstimate, PricingError> {
    rate_card.validate()?;

    if params.revisions > MAX_REVISIONS {
        return Err(PricingError::Validation {
            field: "revisions",
            message: format!(
                "must be between 0 and {}, got {}",
                MAX_REVISIONS, params.revisions
            ),
        });
    }

    let mut breakdown = Vec::with_capacity(6);

    match (rate_card.is_fixed_price, rate_card.fixed_price_amount) {
        (true, Some(amount)) => breakdown.push(LineItem {
            kind: LineItemKind::FixedPrice,
            label: "Fixed price".to_string(),
            amount,
        }),
        (true, None) => {
            return Err(PricingError::Configuration(
                "fixed-price rate card has no fixed price amount".to_string(),
            ))
        }
        (false, _) => {
            breakdown.push(LineItem {
                kind: LineItemKind::BasePrice,
                label: "Base price".to_string(),
                amount: rate_card.base_price,
            });

            if params.word_count > 0 {
                breakdown.push(LineItem {
                    kind: LineItemKind::Words,
                    label: format!(
                        "Words ({} × {})",
                        params.word_count,
                        rate_card
                            .price_per_word
                            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                    ),
                    amount: Decimal::from(params.word_count) * rate_card.price_per_word,
                });
            }
        }
    }

    if params.revisions > 0 {
        breakdown.push(LineItem {
            kind: LineItemKind::Revisions,
            label: format!("Revisions ({} × {})", params.revisions, rate_card.revision_fee),
            amount: Decimal::from(params.revisions) * rate_card.revision_fee,
        });
    }

    let delivery_time = if params.express_delivery {
        breakdown.push(LineItem {
            kind: LineItemKind::ExpressDelivery,
            label: "Express delivery".to_string(),
            amount: rate_card.express_delivery_fee,
        });
        DeliveryTime::Express
    } else {
        DeliveryTime::Standard
    };

    if params.background_music {
        breakdown.push(LineItem {
            kind: LineItemKind::BackgroundMusic,
            label: "Background music".to_string(),
            amount: rate_card.background_music_fee,
        });
    }

    if params.sound_effects {
        breakdown.push(LineItem {
            kind: LineItemKind::SoundEffects,
            label: "Sound effects".to_string(),
            amount: rate_card.sound_effects_fee,
        });
    }

    let subtotal: Decimal = breakdown.iter().map(|item| item.amount).sum();
    let minimum_order_applied = subtotal < rate_card.min_order;
    let floored = subtotal.max(rate_card.min_order);

    let total = round_half_up(floored).to_i64().ok_or_else(|| {
        PricingError::Configuration(format!("estimated total {} is out of range", floored))
    })?;

    Ok(PriceEstimate {
        total,
        subtotal,
        minimum_order_applied,
        delivery_time,
        breakdown,
    })
}
