// admin-console/src/api/dto/mod.rs
pub mod department_dto;
pub mod role_dto;
