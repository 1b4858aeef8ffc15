use crate::e2e::helpers;

use helpers::fixtures::{fixed_rate_card, standard_rate_card};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use test_context::test_context;

fn hundred_words() -> String {
    vec!["word"; 100].join(" ")
}

fn breakdown_kinds(body: &Value) -> Vec<String> {
    body["breakdown"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["kind"].as_str().unwrap().to_string())
        .collect()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_estimate_words_and_revisions(ctx: &TestContext) {
    ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/pricing/estimate",
            &json!({
                "actor_id": "1",
                "script_text": hundred_words(),
                "revisions": 2
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();

    assert_eq!(body["total"], json!(72));
    assert_eq!(body["word_count"], json!(100));
    assert_eq!(body["delivery_time"], json!("48 hours"));
    assert_eq!(body["minimum_order_applied"], json!(false));
    assert_eq!(breakdown_kinds(body), vec!["base_price", "words", "revisions"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_estimate_all_add_ons_with_express_label(ctx: &TestContext) {
    ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/pricing/estimate",
            &json!({
                "actor_id": "1",
                "script_text": "",
                "express_delivery": true,
                "background_music": true,
                "sound_effects": true
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();

    assert_eq!(body["total"], json!(115));
    assert_eq!(body["delivery_time"], json!("24 hours"));
    assert_eq!(
        breakdown_kinds(body),
        vec!["base_price", "express_delivery", "background_music", "sound_effects"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_explicit_word_count_over_script(ctx: &TestContext) {
    ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/pricing/estimate",
            &json!({ "actor_id": "1", "script_text": "two words", "word_count": 250 }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["word_count"], json!(250));
    assert_eq!(body["total"], json!(60));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_word_count_for_fixed_price_actors(ctx: &TestContext) {
    let actor = ctx.fixtures.create_priced_actor("7", "Noah").await.unwrap();
    ctx.fixtures
        .set_rate_card(&actor, fixed_rate_card(dec!(200)))
        .await
        .unwrap();

    let response = ctx
        .client
        .post(
            "/api/pricing/estimate",
            &json!({ "actor_id": "7", "word_count": 500, "revisions": 1 }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["total"], json!(212));
    assert_eq!(breakdown_kinds(body), vec!["fixed_price", "revisions"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_minimum_order(ctx: &TestContext) {
    let actor = ctx.fixtures.create_priced_actor("3", "Mia").await.unwrap();
    let mut card = standard_rate_card();
    card.base_price = dec!(5);
    card.price_per_word = dec!(0);
    card.min_order = dec!(50);
    ctx.fixtures.set_rate_card(&actor, card).await.unwrap();

    let response = ctx
        .client
        .post("/api/pricing/estimate", &json!({ "actor_id": "3" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["total"], json!(50));
    assert_eq!(body["minimum_order_applied"], json!(true));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_too_many_revisions(ctx: &TestContext) {
    ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/pricing/estimate",
            &json!({ "actor_id": "1", "script_text": "hello", "revisions": 6 }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("revisions");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_negative_word_count(ctx: &TestContext) {
    ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/pricing/estimate",
            &json!({ "actor_id": "1", "word_count": -3 }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("word_count");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_pricing_unavailable_for_broken_rate_card(ctx: &TestContext) {
    let actor = ctx.fixtures.create_priced_actor("9", "Leo").await.unwrap();
    let mut card = standard_rate_card();
    card.is_fixed_price = true;
    card.fixed_price_amount = None;
    ctx.fixtures.set_rate_card(&actor, card).await.unwrap();

    let response = ctx
        .client
        .post("/api/pricing/estimate", &json!({ "actor_id": "9", "word_count": 10 }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("Pricing unavailable");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_or_inactive_actor(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/pricing/estimate", &json!({ "actor_id": "404" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);

    let mut input = helpers::fixtures::actor_input("5", "Retired");
    input.is_active = false;
    let actor = ctx.fixtures.create_actor_from(input).await.unwrap();
    ctx.fixtures
        .set_rate_card(&actor, standard_rate_card())
        .await
        .unwrap();

    let response = ctx.client.get("/api/talents/5/pricing").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_rate_card_with_starting_price(ctx: &TestContext) {
    ctx.fixtures.create_priced_actor("1", "Ava").await.unwrap();

    let response = ctx.client.get("/api/talents/1/pricing").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["actor_id"], json!("1"));
    assert_eq!(body["is_fixed_price"], json!(false));
    assert_eq!(body["starting_price"], json!("40"));
    assert_eq!(body["price_per_word"], json!("0.08"));
}
