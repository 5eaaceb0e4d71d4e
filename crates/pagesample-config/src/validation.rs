//! Configuration validation.
//!
//! Collects every problem in one pass so a bad configuration fails fast
//! with the full list.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// A page size setting is zero or negative.
    NonPositivePageSize { name: String, value: i64 },
    /// A page size setting exceeds `pagination.max_page_size`.
    PageSizeAboveMaximum { name: String, value: i64, maximum: i64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Application name is blank.
    EmptyAppName,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePageSize { name, value } => {
                write!(f, "Page size '{}' must be positive, got {}", name, value)
            }
            Self::PageSizeAboveMaximum { name, value, maximum } => {
                write!(
                    f,
                    "Page size '{}' is {} but the maximum is {}",
                    name, value, maximum
                )
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::EmptyAppName => write!(f, "Application name cannot be empty"),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if config.app.name.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyAppName);
        }

        let pagination = &config.pagination;
        Self::check_page_size("pagination.max_page_size", pagination.max_page_size, None, &mut errors);
        Self::check_page_size(
            "pagination.default_page_size",
            pagination.default_page_size,
            Some(pagination.max_page_size),
            &mut errors,
        );
        Self::check_page_size(
            "sample.page_size",
            config.sample.page_size,
            Some(pagination.max_page_size),
            &mut errors,
        );

        let level = config.logging.level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.logging.level.clone(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_page_size(name: &str, value: i64, maximum: Option<i64>, errors: &mut Vec<ConfigValidationError>) {
        if value <= 0 {
            errors.push(ConfigValidationError::NonPositivePageSize {
                name: name.to_string(),
                value,
            });
        } else if let Some(maximum) = maximum.filter(|max| value > *max) {
            errors.push(ConfigValidationError::PageSizeAboveMaximum {
                name: name.to_string(),
                value,
                maximum,
            });
        }
    }
}
