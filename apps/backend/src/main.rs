use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use diffbetween::catalog::{CardSource, DirCardSource, HttpCardSource};
use diffbetween::config::{CardSourceConfig, Config};
use diffbetween::middleware::cors::cors_middleware;
use diffbetween::middleware::request_trace::RequestTrace;
use diffbetween::middleware::structured_logger::StructuredLogger;
use diffbetween::middleware::trace_span::TraceSpan;
use diffbetween::routes;
use diffbetween::state::app_state::AppState;
use tracing::{error, info};

mod telemetry;

/// How often idle games are swept out of the registry.
const SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, systemd unit, or an exported shell).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let cards: Arc<dyn CardSource> = match &config.cards {
        CardSourceConfig::Http(base_url) => {
            info!(base_url = %base_url, "Loading cards over HTTP");
            Arc::new(HttpCardSource::new(base_url.clone()))
        }
        CardSourceConfig::Dir(dir) => {
            info!(dir = %dir.display(), "Loading cards from directory");
            Arc::new(DirCardSource::new(dir.clone()))
        }
    };

    let app_state = AppState::with_cards(cards, config.game.clone());
    let data = web::Data::new(app_state);

    let sweeper = data.clone();
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let swept = sweeper.games.sweep_expired();
            if swept > 0 {
                info!(swept, "Idle games expired");
            }
        }
    });

    info!(
        host = %config.host,
        port = config.port,
        max_sessions = config.game.max_sessions,
        "Starting diffbetween backend"
    );

    let origins = config.cors_allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
