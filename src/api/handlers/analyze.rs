// src/api/handlers/analyze.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::AnalyzeRequest;
use crate::scorer::{StrengthReport, StrengthScorer};

/// Analyze password strength
///
/// Scores the submitted password 0-100, estimates its entropy, checks it
/// against the breach corpus and returns ordered remediation suggestions.
/// The password itself never leaves the service in cleartext.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "Analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Strength report", body = StrengthReport)
    )
)]
pub async fn analyze_password(
    scorer: web::Data<StrengthScorer>,
    body: web::Json<AnalyzeRequest>,
) -> impl Responder {
    let report = scorer.evaluate(&body.password).await;
    HttpResponse::Ok().json(report)
}
