// admin-console/src/repository/mod.rs
pub mod department_repository;
pub mod role_repository;
