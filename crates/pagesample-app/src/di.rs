//! Dependency injection module using Shaku.
//!
//! The mapper configuration is built once from an explicit profile list
//! and handed to the module as component parameters. Call sites resolve
//! the [`MapperProvider`] and pass it on by parameter.

use crate::models::MappingProfile;
use pagesample_core::PageSampleResult;
use pagesample_mapper::{Mapper, MapperConfiguration, Profile};
use shaku::{module, Component, Interface};
use std::sync::Arc;

/// Interface giving access to the shared mapper configuration.
pub trait MapperProvider: Interface {
    /// Returns the shared configuration.
    fn configuration(&self) -> Arc<MapperConfiguration>;

    /// Creates a mapper over the shared configuration.
    fn mapper(&self) -> Mapper {
        Mapper::new(self.configuration())
    }
}

/// Shaku component holding the configuration built at startup.
#[derive(Component)]
#[shaku(interface = MapperProvider)]
pub struct MapperProviderComponent {
    configuration: Arc<MapperConfiguration>,
}

impl MapperProvider for MapperProviderComponent {
    fn configuration(&self) -> Arc<MapperConfiguration> {
        Arc::clone(&self.configuration)
    }
}

impl std::fmt::Debug for MapperProviderComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperProviderComponent")
            .field("configuration", &self.configuration)
            .finish()
    }
}

module! {
    pub PageSampleModule {
        components = [
            MapperProviderComponent,
        ],
        providers = [],
    }
}

/// Returns every mapping profile of the application.
#[must_use]
pub fn default_profiles() -> Vec<Box<dyn Profile>> {
    vec![Box::new(MappingProfile)]
}

/// Builds the mapper configuration from a profile list.
pub fn build_mapper_configuration(profiles: &[Box<dyn Profile>]) -> PageSampleResult<MapperConfiguration> {
    MapperConfiguration::new(|cfg| {
        for profile in profiles {
            cfg.add_profile(profile.as_ref());
        }
    })
}

/// Builds the module around an already built configuration.
#[must_use]
pub fn build_module(configuration: MapperConfiguration) -> Arc<PageSampleModule> {
    let module = PageSampleModule::builder()
        .with_component_parameters::<MapperProviderComponent>(MapperProviderComponentParameters {
            configuration: Arc::new(configuration),
        })
        .build();

    Arc::new(module)
}
