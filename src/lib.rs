// src/lib.rs

// Top-level modules
pub mod models;
pub mod report;
pub mod services;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
