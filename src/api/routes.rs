// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::show_page))
        .route("/submit", web::post().to(handlers::submit_form))
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_check))
                .route("/class-options", web::get().to(handlers::get_class_options))
        );
}
