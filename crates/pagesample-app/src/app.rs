//! Application builder.

use crate::di::MapperProvider;
use crate::models::{sample_models, Model, ViewModel};
use pagesample_config::AppConfig;
use pagesample_core::{PageSampleResult, PaginatedList};
use pagesample_mapper::ProjectToPagedList;
use tracing::info;

/// Pages a set of records projected into view objects.
pub struct AppBuilder {
    config: Option<AppConfig>,
    models: Option<Vec<Model>>,
}

impl AppBuilder {
    /// Creates a new application builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            models: None,
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the sample records.
    #[must_use]
    pub fn with_models(mut self, models: Vec<Model>) -> Self {
        self.models = Some(models);
        self
    }

    /// Projects the records and returns the configured page.
    pub fn run(self, provider: &dyn MapperProvider) -> PageSampleResult<PaginatedList<ViewModel>> {
        let config = self.config.unwrap_or_default();
        let models = self.models.unwrap_or_else(sample_models);

        let request = config
            .pagination
            .page_request(Some(config.sample.page_index), Some(config.sample.page_size))?;

        let configuration = provider.configuration();
        let page = models.project_to_page::<ViewModel>(&configuration, request)?;

        info!(
            page_index = page.page_index(),
            page_size = page.page_size(),
            total_count = page.total_count(),
            total_pages = page.total_pages(),
            has_previous_page = page.has_previous_page(),
            has_next_page = page.has_next_page(),
            "Page ready"
        );

        Ok(page)
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
