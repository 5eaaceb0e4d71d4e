//! # PageSample Core
//!
//! Core types, traits, and error definitions for PageSample.
//! This crate provides the pagination container and the page source
//! abstraction used by the mapping layer and the sample application.

pub mod error;
pub mod pagination;
pub mod result;
pub mod traits;

pub use error::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
