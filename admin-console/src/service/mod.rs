// src/service/mod.rs
pub mod dashboard_service;
pub mod department_service;
pub mod latency;
pub mod role_service;
