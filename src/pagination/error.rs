use thiserror::Error;

/// Errors raised by the pagination layer itself.
///
/// Failures of the underlying data source are never wrapped in this type;
/// they travel through the source's own error type untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("invalid page number {0}, pages start at 1")]
    InvalidPageNumber(i64),

    #[error("invalid page size {0}, page size must be at least 1")]
    InvalidPageSize(i64),

    #[error("query parameter '{key}' must be an integer, got '{raw}'")]
    ParameterType { key: String, raw: String },

    #[error("page {number} with size {size} is out of range")]
    PageOutOfRange { number: u64, size: u64 },
}
