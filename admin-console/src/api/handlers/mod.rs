// admin-console/src/api/handlers/mod.rs
pub mod dashboard_handler;
pub mod department_handler;
pub mod role_handler;
pub mod schema_handler;
pub mod system_handler;
