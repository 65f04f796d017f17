use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_body_from_service_response;
use serde_json::json;

use crate::common::read_json;
use crate::support::create_test_app;
use crate::support::fixtures::{ab_state, TEST_FINAL_FLAG};

fn check_request(body: serde_json::Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/check")
        .set_json(body)
        .to_request()
}

#[actix_web::test]
async fn all_correct_pairs_unlock_final_flag() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(
        &app,
        check_request(json!({"pairs": [
            {"category": "A", "description": "descA"},
            {"category": "B", "description": "descB"}
        ]})),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = read_json(resp).await;
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["correct"], true);
    assert_eq!(results[0]["flag"], "FLAG_A");
    assert_eq!(results[0]["explanation"], "explanation A");
    assert_eq!(results[1]["flag"], "FLAG_B");
    assert_eq!(body["finalFlag"], TEST_FINAL_FLAG);
}

#[actix_web::test]
async fn partial_submission_omits_final_flag() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(
        &app,
        check_request(json!({"pairs": [{"category": "A", "description": "descA"}]})),
    )
    .await;
    let body = read_json(resp).await;

    assert_eq!(body["results"][0]["correct"], true);
    assert_eq!(body["results"][0]["flag"], "FLAG_A");
    assert!(
        body.get("finalFlag").is_none(),
        "finalFlag must be omitted, not null"
    );
}

#[actix_web::test]
async fn wrong_description_keeps_explanation_without_flag() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(
        &app,
        check_request(json!({"pairs": [{"category": "A", "description": "descB"}]})),
    )
    .await;
    let body = read_json(resp).await;
    let result = &body["results"][0];

    assert_eq!(result["category"], "A");
    assert_eq!(result["correct"], false);
    assert_eq!(result["explanation"], "explanation A");
    assert!(result.get("flag").is_none());
    assert_eq!(
        result["message"],
        "Not quite. Re-read the description and hint to tighten the match."
    );
}

#[actix_web::test]
async fn unknown_category_is_soft_failure() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(
        &app,
        check_request(json!({"pairs": [
            {"category": "Nope", "description": "descA"},
            {"category": "B", "description": "descB"}
        ]})),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = read_json(resp).await;
    let unknown = &body["results"][0];
    assert_eq!(unknown["category"], "Nope");
    assert_eq!(unknown["correct"], false);
    assert_eq!(unknown["message"], "Unknown category provided.");
    assert!(unknown.get("flag").is_none());
    assert!(unknown.get("explanation").is_none());
    assert!(body.get("finalFlag").is_none());
}

#[actix_web::test]
async fn results_follow_submission_order() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(
        &app,
        check_request(json!({"pairs": [
            {"category": "B", "description": "descB"},
            {"category": "A", "description": "descA"}
        ]})),
    )
    .await;
    let body = read_json(resp).await;

    assert_eq!(body["results"][0]["category"], "B");
    assert_eq!(body["results"][1]["category"], "A");
    assert_eq!(body["finalFlag"], TEST_FINAL_FLAG);
}

#[actix_web::test]
async fn surplus_pairs_fail_aggregate() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(
        &app,
        check_request(json!({"pairs": [
            {"category": "A", "description": "descA"},
            {"category": "B", "description": "descB"},
            {"category": "B", "description": "descB"}
        ]})),
    )
    .await;
    let body = read_json(resp).await;

    let results = body["results"].as_array().expect("results array");
    assert!(results.iter().all(|r| r["correct"] == true));
    assert!(body.get("finalFlag").is_none());
}

#[actix_web::test]
async fn non_array_pairs_is_rejected_without_results() {
    let app = create_test_app(ab_state()).build().await;

    for payload in [
        json!({}),
        json!({"pairs": null}),
        json!({"pairs": "A=descA"}),
        json!({"pairs": {"category": "A", "description": "descA"}}),
    ] {
        let resp = test::call_service(&app, check_request(payload)).await;
        assert_error_body_from_service_response(
            resp,
            "INVALID_PAIRS",
            StatusCode::BAD_REQUEST,
            Some("Request body must include a pairs array."),
        )
        .await;
    }
}

#[actix_web::test]
async fn non_string_pair_members_do_not_sink_the_submission() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(
        &app,
        check_request(json!({"pairs": [
            {"category": "A", "description": "descA"},
            {"category": "B", "description": null}
        ]})),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = read_json(resp).await;
    assert_eq!(body["results"][0]["correct"], true);
    assert_eq!(body["results"][0]["flag"], "FLAG_A");

    let b = &body["results"][1];
    assert_eq!(b["category"], "B");
    assert_eq!(b["correct"], false);
    assert_eq!(b["explanation"], "explanation B");
    assert!(b.get("flag").is_none());
    assert!(body.get("finalFlag").is_none());
}

#[actix_web::test]
async fn non_object_pair_is_rejected() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(
        &app,
        check_request(json!({"pairs": [{"category": "A", "description": "descA"}, 7]})),
    )
    .await;
    assert_error_body_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("Each pair must be an object."),
    )
    .await;
}

#[actix_web::test]
async fn invalid_json_is_bad_request() {
    let app = create_test_app(ab_state()).build().await;

    let req = test::TestRequest::post()
        .uri("/check")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"pairs\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
}

#[actix_web::test]
async fn empty_pairs_array_is_scored_not_rejected() {
    let app = create_test_app(ab_state()).build().await;

    let resp = test::call_service(&app, check_request(json!({"pairs": []}))).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = read_json(resp).await;
    assert_eq!(body["results"], json!([]));
    assert!(body.get("finalFlag").is_none());
}
