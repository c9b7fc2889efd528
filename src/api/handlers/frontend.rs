// src/api/handlers/frontend.rs
use actix_web::{HttpResponse, Responder};

use crate::api::types::HealthResponse;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

// Single-page front end, embedded so the binary has no file-system
// dependency at runtime.
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}
