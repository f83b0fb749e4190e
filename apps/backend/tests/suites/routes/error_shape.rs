use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::assert_problem_details;
use diffbetween::catalog::DirCardSource;
use diffbetween::config::GameSettings;
use diffbetween::state::app_state::AppState;
use serde_json::json;

use crate::support::create_test_app;
use crate::support::game_setup::{seeded_settings, service_with, write_catalog};

fn create_request() -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({ "name": "al", "rounds": 1, "rating": "R" }))
        .to_request()
}

#[actix_web::test]
async fn exhausted_ids_are_service_unavailable() {
    let settings = GameSettings {
        max_sessions: 1,
        ..seeded_settings()
    };
    let state = AppState::new(service_with(10, 60, settings));
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, create_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, create_request()).await;
    let problem = assert_problem_details(
        resp,
        "NO_IDS_AVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
        Some("no game ids"),
    )
    .await;
    assert_eq!(problem.title, "No Ids Available");
}

#[actix_web::test]
async fn missing_catalog_is_bad_gateway() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = AppState::with_cards(
        Arc::new(DirCardSource::new(dir.path())),
        seeded_settings(),
    );
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, create_request()).await;
    assert_problem_details(
        resp,
        "CARD_SOURCE_UNAVAILABLE",
        StatusCode::BAD_GATEWAY,
        Some(".csv"),
    )
    .await;
}

#[actix_web::test]
async fn malformed_catalog_is_bad_gateway() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(dir.path(), "one,G\ntwo,G,extra\n", "p,G\n");
    let state = AppState::with_cards(
        Arc::new(DirCardSource::new(dir.path())),
        seeded_settings(),
    );
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, create_request()).await;
    assert_problem_details(
        resp,
        "MALFORMED_CARD_SOURCE",
        StatusCode::BAD_GATEWAY,
        Some("line 2"),
    )
    .await;
}

#[actix_web::test]
async fn too_few_setups_after_rating_filter() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(
        dir.path(),
        "clean one,G\nclean two,PG\nfilthy one,X\nfilthy two,X\n",
        &(0..20).map(|i| format!("punch {i},G\n")).collect::<String>(),
    );
    let state = AppState::with_cards(
        Arc::new(DirCardSource::new(dir.path())),
        seeded_settings(),
    );
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({ "name": "al", "rounds": 2, "rating": "PG" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "TOO_FEW_SETUP_CARDS",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("need 4, have 2"),
    )
    .await;
}
