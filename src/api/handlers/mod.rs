// src/api/handlers/mod.rs
pub mod analyze;
pub mod frontend;
pub mod generator;
