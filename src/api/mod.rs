// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::breach::BreachChecker;
use crate::core::config::Config;
use crate::scorer::StrengthScorer;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Analysis endpoints
        crate::api::handlers::analyze::analyze_password,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // System endpoints
        crate::api::handlers::frontend::health
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::AnalyzeRequest,
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::HealthResponse,

            // Strength report
            crate::scorer::StrengthReport,
            crate::scorer::StrengthLevel,

            // Generation options
            crate::models::GenerationOptions
        )
    ),
    tags(
        (name = "Analysis", description = "Password strength analysis endpoints"),
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service status endpoints")
    ),
    info(
        title = "PassGauge API",
        version = "0.1.0",
        description = "Password strength analysis and secure generation service",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting PassGauge API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let checker = BreachChecker::new(config.breach_api_url.clone(), config.breach_timeout);
    let scorer_data = web::Data::new(StrengthScorer::new(checker));
    let config_data = web::Data::new(config.clone());

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(scorer_data.clone())
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular API routes
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
