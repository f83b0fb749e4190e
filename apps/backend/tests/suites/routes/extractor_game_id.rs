use actix_web::http::StatusCode;
use actix_web::{test, web, Responder};
use backend_test_support::assert_problem_details;
use diffbetween::extractors::GamePath;
use diffbetween::AppError;
use serde_json::Value;

use crate::support::create_test_app;
use crate::support::game_setup::test_state;

/// Echoes the extracted id.
async fn echo(game_id: GamePath) -> Result<impl Responder, AppError> {
    Ok(web::Json(serde_json::json!({ "game_id": game_id.id() })))
}

fn echo_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/games/{game_id}/echo", web::get().to(echo));
}

#[actix_web::test]
async fn positive_id_is_extracted() {
    let app = create_test_app(test_state())
        .with_routes(echo_routes)
        .build()
        .await;

    let req = test::TestRequest::get().uri("/games/17/echo").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["game_id"], 17);
}

#[actix_web::test]
async fn invalid_ids_are_bad_requests() {
    let app = create_test_app(test_state())
        .with_routes(echo_routes)
        .build()
        .await;

    for raw in ["0", "-1", "abc", "99999999999"] {
        let req = test::TestRequest::get()
            .uri(&format!("/games/{raw}/echo"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(
            resp,
            "INVALID_GAME_ID",
            StatusCode::BAD_REQUEST,
            Some("Invalid game id"),
        )
        .await;
    }
}
