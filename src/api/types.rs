// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to evaluate; missing or empty yields the Empty report
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Desired length, clamped to 8..=128 (default 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default true)
    pub uppercase: Option<bool>,
    /// Include lowercase letters (default true)
    pub lowercase: Option<bool>,
    /// Include digits (default true)
    pub numbers: Option<bool>,
    /// Include punctuation symbols (default true)
    pub symbols: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// The generated password
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what was wrong with the request
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
