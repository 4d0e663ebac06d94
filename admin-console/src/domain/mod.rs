// src/domain/mod.rs
pub mod dashboard_model;
pub mod department_model;
pub mod menu_model;
pub mod role_model;
pub mod status;
