//! Stable response envelope
//!
//! The request surface always answers `{success, data, error}`; internal
//! error types never cross the boundary.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Boundary response shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Stable error string, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response
    #[inline]
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed response
    #[inline]
    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Map an orchestration result to the boundary shape
    #[must_use]
    pub fn from_result(result: Result<T, AnalysisError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::err(err.to_string()),
        }
    }
}
