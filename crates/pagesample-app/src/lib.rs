//! # PageSample Application Library
//!
//! Sample records, the mapping profile that turns them into view objects,
//! dependency injection wiring, and the application that pages the result.

pub mod app;
pub mod di;
pub mod logging;
pub mod models;
