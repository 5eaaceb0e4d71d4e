//! Unified error type for pagination, mapping, and configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for PageSample.
#[derive(Error, Debug)]
pub enum PageSampleError {
    // ============ Pagination Errors ============
    /// Page size must be a positive integer.
    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(i64),

    /// A page source failed to count or fetch its elements.
    #[error("Page source error: {0}")]
    Source(String),

    // ============ Mapping Errors ============
    /// No map registered for the requested type pair.
    #[error("Missing map: {source_type} -> {destination_type}")]
    MappingNotFound {
        source_type: &'static str,
        destination_type: &'static str,
    },

    /// The same type pair was registered more than once.
    #[error("Duplicate map: {source_type} -> {destination_type}")]
    DuplicateMapping {
        source_type: &'static str,
        destination_type: &'static str,
    },

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageSampleError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPageSize(_) => "INVALID_PAGE_SIZE",
            Self::Source(_) => "PAGE_SOURCE_ERROR",
            Self::MappingNotFound { .. } => "MAPPING_NOT_FOUND",
            Self::DuplicateMapping { .. } => "DUPLICATE_MAPPING",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a page source error.
    #[must_use]
    pub fn page_source<T: Into<String>>(message: T) -> Self {
        Self::Source(message.into())
    }

    /// Creates a missing map error for a type pair.
    #[must_use]
    pub fn mapping_not_found<S: ?Sized, D: ?Sized>() -> Self {
        Self::MappingNotFound {
            source_type: std::any::type_name::<S>(),
            destination_type: std::any::type_name::<D>(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Checks if this error originates from the caller's input rather than
    /// the environment.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPageSize(_) | Self::MappingNotFound { .. } | Self::DuplicateMapping { .. }
        )
    }
}

impl From<serde_json::Error> for PageSampleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error report, printed by the sample binary on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `PageSampleError`.
    #[must_use]
    pub fn from_error(error: &PageSampleError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&PageSampleError> for ErrorResponse {
    fn from(error: &PageSampleError) -> Self {
        Self::from_error(error)
    }
}
