//! HTTP handlers and route configuration.

mod authors;
mod health;
mod posts;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, web};
use blog_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::index))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::resource("/authors")
                        .route(web::get().to(authors::list))
                        .route(web::post().to(authors::create)),
                )
                .service(
                    web::resource("/authors/{id}")
                        .route(web::get().to(authors::get))
                        .route(web::put().to(authors::update))
                        .route(web::delete().to(authors::delete)),
                )
                .service(
                    web::resource("/authors/{id}/posts").route(web::get().to(authors::list_posts)),
                )
                .service(
                    web::resource("/posts")
                        .route(web::get().to(posts::list))
                        .route(web::post().to(posts::create)),
                )
                .service(
                    web::resource("/posts/{id}")
                        .route(web::get().to(posts::get))
                        .route(web::put().to(posts::update))
                        .route(web::delete().to(posts::delete)),
                ),
        );
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}
