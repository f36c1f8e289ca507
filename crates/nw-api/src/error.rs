//! Error types for backend request checks

use crate::response::ApiResponse;

/// Request rejected before reaching a handler
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Parameters with no value
    #[error("Missing parameter(s): {}", .0.join(", "))]
    MissingArguments(Vec<String>),

    /// Values outside the allowed set
    #[error("Unknown value(s): {}", .0.join(", "))]
    UnknownValues(Vec<String>),

    /// Values given more than once
    #[error("Duplicate value(s): {}", .0.join(", "))]
    DuplicateValues(Vec<String>),
}

impl ApiError {
    /// Convert into an error response
    #[inline]
    #[must_use]
    pub fn into_response<T>(self) -> ApiResponse<T> {
        ApiResponse::Error(self.to_string())
    }
}
