//! # PageSample Mapper
//!
//! Explicitly registered type maps and the projection helpers that turn a
//! source sequence into a page of destination objects.
//!
//! Maps are registered once through [`MapperConfiguration::builder`] or
//! [`MapperConfiguration::new`], usually by adding [`Profile`]s, and the
//! resulting configuration is shared behind an `Arc`.

mod configuration;
mod mapper;
mod projection;

pub use configuration::*;
pub use mapper::*;
pub use projection::*;
