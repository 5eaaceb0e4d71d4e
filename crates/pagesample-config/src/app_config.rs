//! Application configuration structures.

use pagesample_core::{PageRequest, PageSampleResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Page size defaults and limits.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// The page requested by the sample run.
    #[serde(default)]
    pub sample: SampleConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "pagesample".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Page size defaults and limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when a request does not name one.
    pub default_page_size: i64,
    /// Largest page size a request may resolve to.
    pub max_page_size: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl PaginationConfig {
    /// Resolves optional request parameters into a page request.
    ///
    /// A missing index means the first page and a missing size means the
    /// default size. Positive sizes above the maximum are capped; zero and
    /// negative sizes are rejected.
    pub fn page_request(&self, page_index: Option<i64>, page_size: Option<i64>) -> PageSampleResult<PageRequest> {
        let size = page_size.unwrap_or(self.default_page_size);
        let size = if size > 0 { size.min(self.max_page_size) } else { size };
        PageRequest::new(page_index.unwrap_or(1), size)
    }
}

/// The page requested by the sample run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// 1-based page index.
    pub page_index: i64,
    /// Items per page.
    pub page_size: i64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            page_index: 2,
            page_size: 2,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Log format (json, pretty).
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
