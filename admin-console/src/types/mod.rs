pub mod query;
pub mod response;

pub use query::PaginationQuery;
pub use response::{ApiResponse, SUCCESS_CODE};
