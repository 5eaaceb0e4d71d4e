//! Result type aliases for PageSample.

use crate::PageSampleError;

/// A specialized `Result` type for PageSample operations.
pub type PageSampleResult<T> = Result<T, PageSampleError>;
