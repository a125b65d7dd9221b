// src/assets.rs
use actix_web::{HttpResponse, Responder, web};
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// GET /static/{path} - Stylesheet and page script baked into the binary
pub async fn static_file_handler(path: web::Path<String>) -> impl Responder {
    let path = path.into_inner();

    match StaticAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}

pub fn configure_assets(cfg: &mut web::ServiceConfig) {
    cfg.route("/static/{path:.*}", web::get().to(static_file_handler));
}
