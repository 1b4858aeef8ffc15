use uuid::Uuid;

use super::error::QuoteServiceError;
use super::model::{ClientContact, NewQuoteRequest};
use crate::domain::pricing::{OrderParameters, PriceEstimate};
use crate::domain::shared::{is_valid_email, non_blank};

/// Turn a priced order into the record handed to the quote store.
///
/// Name, email and script text are required. All missing ones are reported
/// together, in that order. Performs no I/O.
pub fn build_quote_payload(
    voice_actor_id: Uuid,
    contact: &ClientContact,
    params: &OrderParameters,
    estimate: &PriceEstimate,
    special_requirements: Option<&str>,
) -> Result<NewQuoteRequest, QuoteServiceError> {
    let name = contact.name.trim();
    let email = contact.email.trim();
    let script_text = params.script_text.trim();

    let missing: Vec<&'static str> = [
        ("name", name.is_empty()),
        ("email", email.is_empty()),
        ("script_text", script_text.is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, is_missing)| is_missing.then_some(field))
    .collect();

    if !missing.is_empty() {
        return Err(QuoteServiceError::MissingFields(missing));
    }

    if !is_valid_email(email) {
        return Err(QuoteServiceError::Invalid(
            "email: must be a valid email address".to_string(),
        ));
    }

    Ok(NewQuoteRequest {
        voice_actor_id,
        client_name: name.to_string(),
        client_email: email.to_string(),
        client_phone: non_blank(contact.phone.as_deref()),
        script_text: script_text.to_string(),
        word_count: storable("word_count", params.word_count)?,
        revisions_requested: storable("revisions", params.revisions)?,
        express_delivery: params.express_delivery,
        background_music: params.background_music,
        sound_effects: params.sound_effects,
        estimated_price: estimate.total,
        delivery_time: estimate.delivery_time.to_string(),
        special_requirements: non_blank(special_requirements),
    })
}

fn storable(field: &str, value: u32) -> Result<i32, QuoteServiceError> {
    i32::try_from(value).map_err(|_| {
        QuoteServiceError::Invalid(format!("{}: {} is too large to record", field, value))
    })
}
