//! # PageSample
//!
//! Projects the sample records into view objects and prints the
//! configured page as JSON.

use pagesample_app::app::AppBuilder;
use pagesample_app::di::{build_mapper_configuration, build_module, default_profiles, MapperProvider};
use pagesample_app::logging::{init_logging, log_failure};
use pagesample_config::{AppConfig, ConfigLoader};
use pagesample_core::{ErrorResponse, PageSampleResult};
use shaku::HasComponent;
use std::sync::Arc;
use tracing::info;

fn main() {
    let loader = ConfigLoader::from_default_location();

    let logging = loader
        .as_ref()
        .map(|loader| loader.get().logging)
        .unwrap_or_default();
    if let Err(e) = init_logging(&logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting PageSample...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = loader.and_then(|loader| run(&loader.get())) {
        log_failure(&e);
        if let Ok(report) = serde_json::to_string(&ErrorResponse::from(&e)) {
            eprintln!("{}", report);
        }
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> PageSampleResult<()> {
    info!("Environment: {}", config.app.environment);

    let configuration = build_mapper_configuration(&default_profiles())?;
    let module = build_module(configuration);
    let provider: Arc<dyn MapperProvider> = module.resolve();

    let page = AppBuilder::new()
        .with_config(config.clone())
        .run(provider.as_ref())?;

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
