//! CORS policy for the API.

use actix_cors::Cors;
use actix_web::http::header;

/// Permissive CORS: any origin, the CRUD verbs, JSON and auth headers.
pub fn api_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600)
}
