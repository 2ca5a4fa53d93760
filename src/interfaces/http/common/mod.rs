//! Shared HTTP building blocks: response envelope, error mapping, extractors

pub mod api_query;
pub mod error;
pub mod response;
pub mod validated_json;

pub use api_query::ApiQuery;
pub use error::{domain_error_response, ApiError};
pub use response::{ApiResponse, EmptyData, PaginatedResponse};
pub use validated_json::ValidatedJson;
