//! Mapper bound to a shared configuration.

use crate::MapperConfiguration;
use pagesample_core::PageSampleResult;
use std::sync::Arc;

/// Applies the maps of a shared [`MapperConfiguration`].
#[derive(Debug, Clone)]
pub struct Mapper {
    configuration: Arc<MapperConfiguration>,
}

impl Mapper {
    /// Creates a mapper over the given configuration.
    #[must_use]
    pub fn new(configuration: Arc<MapperConfiguration>) -> Self {
        Self { configuration }
    }

    /// Returns the configuration this mapper reads from.
    #[must_use]
    pub fn configuration(&self) -> &Arc<MapperConfiguration> {
        &self.configuration
    }

    /// Maps one value.
    pub fn map<S: 'static, D: 'static>(&self, source: &S) -> PageSampleResult<D> {
        let map = self.configuration.resolve_map::<S, D>()?;
        Ok((*map)(source))
    }

    /// Maps every value of a slice, preserving order.
    pub fn map_all<S: 'static, D: 'static>(&self, sources: &[S]) -> PageSampleResult<Vec<D>> {
        let map = self.configuration.resolve_map::<S, D>()?;
        Ok(sources.iter().map(|source| (*map)(source)).collect())
    }
}
