// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Front end and liveness
    cfg.route("/", web::get().to(handlers::frontend::index))
        .route("/health", web::get().to(handlers::frontend::health))
        // POST: Score a password and return the strength report
        .route("/analyze", web::post().to(handlers::analyze::analyze_password))
        // POST: Generate a random password
        .route("/generate", web::post().to(handlers::generator::generate_password));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use super::configure_routes;
    use crate::breach::BreachChecker;
    use crate::core::config::Config;
    use crate::scorer::StrengthScorer;

    // Breach endpoint pointed at a closed port so lookups fail fast and
    // degrade to "not breached".
    fn scorer_data() -> web::Data<StrengthScorer> {
        let checker = BreachChecker::new("http://127.0.0.1:9", Duration::from_millis(200));
        web::Data::new(StrengthScorer::new(checker))
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(scorer_data())
                    .app_data(web::Data::new(Config::default()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_analyze_empty_password_returns_empty_report() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["score"], 0);
        assert_eq!(body["level"], "Empty");
        assert_eq!(body["entropy"], 0.0);
        assert_eq!(body["breached"], false);
        assert_eq!(body["suggestions"], json!([]));
    }

    #[actix_web::test]
    async fn test_analyze_weak_password() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(json!({"password": "password"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["level"], "Weak");
        assert_eq!(body["score"], 30);
        assert_eq!(body["entropy"], 37.6);
        // Lookup against the unreachable service degrades silently.
        assert_eq!(body["breached"], false);
        assert_eq!(body["breach_count"], 0);
    }

    #[actix_web::test]
    async fn test_generate_with_defaults() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[actix_web::test]
    async fn test_generate_letters_and_digits_only() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({
                "length": 12,
                "uppercase": true,
                "lowercase": true,
                "numbers": true,
                "symbols": false
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
    }

    #[actix_web::test]
    async fn test_generate_no_classes_is_bad_request() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({
                "uppercase": false,
                "lowercase": false,
                "numbers": false,
                "symbols": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("character type"));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }
}
