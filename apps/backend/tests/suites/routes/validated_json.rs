use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem_details;

use crate::support::create_test_app;
use crate::support::game_setup::test_state;

#[actix_web::test]
async fn syntax_error_is_bad_request() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
}

#[actix_web::test]
async fn missing_fields_are_bad_request() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(serde_json::json!({ "name": "al" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("missing"),
    )
    .await;
}

#[actix_web::test]
async fn oversized_body_is_rejected() {
    let app = create_test_app(test_state()).with_prod_routes().build().await;
    let name = "x".repeat(diffbetween::extractors::validated_json::MAX_BODY_BYTES);

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(serde_json::json!({ "name": name, "rounds": 1, "rating": "G" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("exceeds"),
    )
    .await;
}
