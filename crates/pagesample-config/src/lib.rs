//! # PageSample Config
//!
//! Configuration management for PageSample.
//! Supports layered configuration from files, `.env`, environment
//! variables, and runtime reload.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
