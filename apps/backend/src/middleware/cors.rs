use actix_cors::Cors;
use actix_web::http::header;

/// Origins used when none are configured.
const LOCAL_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// CORS for the game API.
///
/// Only http(s) origins from `allowed` are honoured; `"null"` and anything
/// else is dropped. With nothing usable configured, only the local
/// frontend origins are allowed.
pub fn cors_middleware(allowed: &[String]) -> Cors {
    let mut origins: Vec<&str> = allowed
        .iter()
        .map(|s| s.trim())
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .collect();
    if origins.is_empty() {
        origins = LOCAL_ORIGINS.to_vec();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}
