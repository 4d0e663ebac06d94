// admin-console/src/shared/types/mod.rs

pub mod pagination;

// Re-export commonly used types
pub use pagination::{PageResult, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
