//! Sample records and their view objects.

use pagesample_mapper::{MapperConfigurationBuilder, Profile};
use serde::{Deserialize, Serialize};

/// A stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Model {
    /// Creates a record.
    #[must_use]
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// The view object a [`Model`] is projected into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

/// Registers the `Model -> ViewModel` map.
#[derive(Debug, Default, Clone, Copy)]
pub struct MappingProfile;

impl Profile for MappingProfile {
    fn name(&self) -> &'static str {
        "MappingProfile"
    }

    fn configure(&self, cfg: &mut MapperConfigurationBuilder) {
        cfg.create_map_from::<Model, ViewModel>();
    }
}

/// The four sample records; the last two share id 3.
#[must_use]
pub fn sample_models() -> Vec<Model> {
    vec![
        Model::new(1, "Test1", "Test1"),
        Model::new(2, "Test2", "Test2"),
        Model::new(3, "Test3", "Test3"),
        Model::new(3, "Test4", "Test4"),
    ]
}
