//! The browser UI, embedded at compile time.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

const INDEX_HTML: &str = include_str!("../../public/index.html");
const SCRIPT_JS: &str = include_str!("../../public/script.js");
const STYLES_CSS: &str = include_str!("../../public/styles.css");

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(SCRIPT_JS)
}

async fn styles() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLES_CSS)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/index.html", web::get().to(index))
        .route("/script.js", web::get().to(script))
        .route("/styles.css", web::get().to(styles));
}
