// src/models.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}
