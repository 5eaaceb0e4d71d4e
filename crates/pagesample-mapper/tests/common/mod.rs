//! Shared fixtures for projection tests.

use pagesample_mapper::{MapperConfiguration, MapperConfigurationBuilder, Profile};
use serde::Serialize;

/// Source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Destination view object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
        }
    }
}

pub struct MappingProfile;

impl Profile for MappingProfile {
    fn configure(&self, cfg: &mut MapperConfigurationBuilder) {
        cfg.create_map_from::<Model, ViewModel>();
    }
}

pub fn model(id: i32, name: &str) -> Model {
    Model {
        id,
        first_name: name.to_string(),
        last_name: name.to_string(),
    }
}

/// Four records, the last two sharing id 3.
pub fn sample_models() -> Vec<Model> {
    vec![
        model(1, "Test1"),
        model(2, "Test2"),
        model(3, "Test3"),
        model(3, "Test4"),
    ]
}

pub fn configuration() -> MapperConfiguration {
    MapperConfiguration::new(|cfg| {
        cfg.add_profile(&MappingProfile);
    })
    .expect("Failed to build mapper configuration")
}
