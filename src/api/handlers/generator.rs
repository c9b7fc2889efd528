// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GenerationOptions;

/// Generate a secure password
///
/// Generates a random password from the OS CSPRNG. Every selected character
/// class is represented at least once; the requested length is clamped to
/// 8..=128. Rejects requests that select no character class at all.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerateResponse),
        (status = 400, description = "No character class selected", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    body: web::Json<GenerateRequest>,
) -> impl Responder {
    // Defaults mirror the front end: all classes on, configured length.
    let options = GenerationOptions {
        length: body.length.unwrap_or(config.default_password_length),
        include_uppercase: body.uppercase.unwrap_or(true),
        include_lowercase: body.lowercase.unwrap_or(true),
        include_numbers: body.numbers.unwrap_or(true),
        include_symbols: body.symbols.unwrap_or(true),
    };

    let generator = PasswordGenerator::new();
    match generator.generate(&options) {
        Ok(password) => HttpResponse::Ok().json(GenerateResponse { password }),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        }),
    }
}
