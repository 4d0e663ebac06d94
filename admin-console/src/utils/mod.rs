// admin-console/src/utils/mod.rs

pub mod error_helper;
pub mod tree;
pub mod validation;
