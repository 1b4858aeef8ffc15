// Repository and HTTP tests against a real PostgreSQL schema (requires Docker)

use crate::e2e::helpers;

use helpers::fixtures::{actor_input, sample_input, standard_rate_card};
use helpers::postgres::PgTestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;
use voicecast_backend::domain::contact::{
    ContactCounts, ContactStatus, NewContactSubmission,
};
use voicecast_backend::domain::pricing::RateCardSource;
use voicecast_backend::domain::quote::{NewQuoteRequest, QuoteCounts, QuoteStatus};
use voicecast_backend::domain::talent::ActorCounts;
use voicecast_backend::error::AppError;
use voicecast_backend::infrastructure::repositories::{
    ContactRepository, QuoteRepository, VoiceActorRepository,
};

fn new_quote(voice_actor_id: Uuid, client_name: &str) -> NewQuoteRequest {
    NewQuoteRequest {
        voice_actor_id,
        client_name: client_name.to_string(),
        client_email: "client@example.com".to_string(),
        client_phone: None,
        script_text: "Short read".to_string(),
        word_count: 2,
        revisions_requested: 0,
        express_delivery: false,
        background_music: false,
        sound_effects: false,
        estimated_price: 40,
        delivery_time: "48 hours".to_string(),
        special_requirements: None,
    }
}

fn new_contact(subject: &str) -> NewContactSubmission {
    NewContactSubmission {
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        subject: subject.to_string(),
        message: "Hello".to_string(),
        ip_address: Some("198.51.100.23".to_string()),
        user_agent: None,
    }
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_find_actors_by_code_and_id(ctx: &PgTestContext) {
    let actor = ctx.fixtures.create_priced_actor("7", "Ava").await.unwrap();

    let by_code = ctx.actors.find_talent("7").await.unwrap().unwrap();
    assert_eq!(by_code.actor.id, actor.id);
    assert_eq!(by_code.actor.languages, vec!["English".to_string()]);
    assert_eq!(by_code.rate_card, Some(standard_rate_card()));

    let by_id = ctx.actors.find_talent_by_id(actor.id).await.unwrap().unwrap();
    assert_eq!(by_id.actor.actor_id, "7");

    assert!(ctx.actors.find_talent("70").await.unwrap().is_none());
    assert!(ctx
        .actors
        .find_talent_by_id(Uuid::new_v4())
        .await
        .unwrap()
        .is_none());
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_map_duplicate_actor_codes_to_conflict(ctx: &PgTestContext) {
    ctx.fixtures.create_actor_from(actor_input("1", "Ava")).await.unwrap();
    let other = ctx.fixtures.create_actor_from(actor_input("2", "Noah")).await.unwrap();

    let err = ctx.actors.create(&actor_input("1", "Copy")).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    let err = ctx
        .actors
        .update(other.id, &actor_input("1", "Noah"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_upsert_rate_card_at_column_precision(ctx: &PgTestContext) {
    let actor = ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();

    let mut card = standard_rate_card();
    card.base_price = dec!(55);
    card.price_per_word = dec!(0.08125);
    ctx.fixtures.set_rate_card(&actor, card).await.unwrap();

    let stored = ctx.actors.find_rate_card("1").await.unwrap().unwrap();
    assert_eq!(stored.voice_actor_id, actor.id);
    assert_eq!(stored.rate_card.base_price, dec!(55));
    // NUMERIC(10, 4) rounds half away from zero
    assert_eq!(stored.rate_card.price_per_word, dec!(0.0813));
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_only_expose_active_actors_to_pricing_and_catalogue(ctx: &PgTestContext) {
    let mut featured = actor_input("1", "Ava");
    featured.is_featured = true;
    let featured = ctx.fixtures.create_actor_from(featured).await.unwrap();
    ctx.fixtures
        .set_rate_card(&featured, standard_rate_card())
        .await
        .unwrap();

    let mut inactive = actor_input("2", "Noah");
    inactive.is_active = false;
    let inactive = ctx.fixtures.create_actor_from(inactive).await.unwrap();
    ctx.fixtures
        .set_rate_card(&inactive, standard_rate_card())
        .await
        .unwrap();

    assert!(ctx.actors.find_rate_card("2").await.unwrap().is_none());
    assert!(ctx.actors.find_rate_card("1").await.unwrap().is_some());

    let active = ctx.actors.list_talents(true).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(ctx.actors.list_talents(false).await.unwrap().len(), 2);

    assert_eq!(
        ctx.actors.count_actors().await.unwrap(),
        ActorCounts {
            total: 2,
            active: 1,
            featured: 1,
        }
    );
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_filter_update_and_count_quotes(ctx: &PgTestContext) {
    let actor = ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();
    let first = ctx.quotes.insert(&new_quote(actor.id, "First")).await.unwrap();
    let second = ctx.quotes.insert(&new_quote(actor.id, "Second")).await.unwrap();
    assert_eq!(first.status, QuoteStatus::Pending);

    let updated = ctx
        .quotes
        .update_status(first.id, QuoteStatus::InProgress, Some("Booked studio"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, QuoteStatus::InProgress);

    // Notes survive a status change that does not send new ones
    let updated = ctx
        .quotes
        .update_status(first.id, QuoteStatus::Completed, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.admin_notes.as_deref(), Some("Booked studio"));

    let all = ctx.quotes.list(None).await.unwrap();
    assert_eq!(
        all.iter().map(|q| q.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    let pending = ctx.quotes.list(Some(QuoteStatus::Pending)).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second.id);

    assert_eq!(
        ctx.quotes.counts().await.unwrap(),
        QuoteCounts {
            total: 2,
            pending: 1
        }
    );
    assert!(ctx
        .quotes
        .update_status(Uuid::new_v4(), QuoteStatus::Cancelled, None)
        .await
        .unwrap()
        .is_none());
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_refuse_deleting_actor_with_quotes(ctx: &PgTestContext) {
    let booked = ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();
    let idle = ctx.fixtures.create_priced_actor("2", "Noah").await.unwrap();
    ctx.fixtures
        .add_sample(&idle, sample_input("promo", 0))
        .await
        .unwrap();
    ctx.quotes.insert(&new_quote(booked.id, "Jane")).await.unwrap();

    let err = ctx.actors.delete(booked.id).await.unwrap_err();
    assert!(
        matches!(&err, AppError::Conflict(msg) if msg.contains("deactivate")),
        "got {:?}",
        err
    );

    // Pricing and samples cascade with the actor
    assert!(ctx.actors.delete(idle.id).await.unwrap());
    assert!(!ctx.actors.delete(idle.id).await.unwrap());
    let (samples,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM audio_samples")
        .fetch_one(ctx.pool.as_ref())
        .await
        .unwrap();
    assert_eq!(samples, 0);
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_order_samples_and_reject_duplicate_codes(ctx: &PgTestContext) {
    let actor = ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();
    ctx.fixtures
        .add_sample(&actor, sample_input("late", 2))
        .await
        .unwrap();
    let early = ctx
        .fixtures
        .add_sample(&actor, sample_input("early", 0))
        .await
        .unwrap();

    let talent = ctx.actors.find_talent("1").await.unwrap().unwrap();
    assert_eq!(
        talent
            .samples
            .iter()
            .map(|s| s.sample_id.as_str())
            .collect::<Vec<_>>(),
        vec!["early", "late"]
    );

    let err = ctx
        .actors
        .create_sample(actor.id, &sample_input("early", 5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);

    let mut renamed = sample_input("early", 0);
    renamed.name = "Early bird".to_string();
    let updated = ctx
        .actors
        .update_sample(early.id, &renamed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Early bird");
    assert!(ctx
        .actors
        .update_sample(Uuid::new_v4(), &renamed)
        .await
        .unwrap()
        .is_none());

    assert!(ctx.actors.delete_sample(early.id).await.unwrap());
    assert!(!ctx.actors.delete_sample(early.id).await.unwrap());
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_filter_and_count_contacts(ctx: &PgTestContext) {
    let first = ctx.contacts.insert(&new_contact("general")).await.unwrap();
    ctx.contacts.insert(&new_contact("billing")).await.unwrap();
    assert_eq!(first.status, ContactStatus::New);
    assert_eq!(first.ip_address.as_deref(), Some("198.51.100.23"));

    ctx.contacts
        .update_status(first.id, ContactStatus::Closed, Some("Resolved"))
        .await
        .unwrap()
        .unwrap();

    let closed = ctx.contacts.list(Some(ContactStatus::Closed)).await.unwrap();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].admin_notes.as_deref(), Some("Resolved"));

    assert_eq!(
        ctx.contacts.counts().await.unwrap(),
        ContactCounts { total: 2, new: 1 }
    );

    // The schema only accepts known subjects
    assert!(ctx.contacts.insert(&new_contact("careers")).await.is_err());
}

#[test_context(PgTestContext)]
#[tokio::test]
async fn it_should_store_quotes_submitted_over_http(ctx: &PgTestContext) {
    ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();

    ctx.client
        .get("/health/ready")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .post(
            "/api/quotes",
            &json!({
                "actor_id": "1",
                "client_name": "Jane",
                "client_email": "jane@example.com",
                "script_text": vec!["word"; 500].join(" "),
                "word_count": 1,
                "background_music": true
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    // 40 base + 500 words * 0.08 + 20 music
    assert_eq!(response.body.as_ref().unwrap()["estimated_price"], json!(100));

    let stored = ctx.quotes.list(None).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].word_count, 500);
    assert_eq!(stored[0].estimated_price, 100);
    assert!(stored[0].background_music);

    let response = ctx
        .client
        .get_with_auth("/admin/stats", &ctx.admin_token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["pending_quotes"], json!(1));
    assert_eq!(response.body.as_ref().unwrap()["active_actors"], json!(1));
}
