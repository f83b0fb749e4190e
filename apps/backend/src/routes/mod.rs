use actix_web::web;

pub mod games;
pub mod health;

/// Register every application route.
///
/// `main.rs` adds the middleware stack around these; tests use the same
/// function so endpoints are exercised exactly as served.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness and health: /status, /health
    cfg.configure(health::configure_routes);

    // Games: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
