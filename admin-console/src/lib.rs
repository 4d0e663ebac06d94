// src/lib.rs
pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod repository;
pub mod schema;
pub mod service;
pub mod shared;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use types::ApiResponse;
