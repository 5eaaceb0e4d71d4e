//! Type-map registry.

use crate::Mapper;
use pagesample_core::{PageSampleError, PageSampleResult};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// A registered conversion from `S` to `D`.
pub type MapFn<S, D> = dyn Fn(&S) -> D + Send + Sync;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TypePair {
    source: TypeId,
    destination: TypeId,
}

impl TypePair {
    fn of<S: 'static, D: 'static>() -> Self {
        Self {
            source: TypeId::of::<S>(),
            destination: TypeId::of::<D>(),
        }
    }
}

/// A type-erased `Arc<MapFn<S, D>>` plus the names used in errors.
struct TypeMap {
    source_type: &'static str,
    destination_type: &'static str,
    map: Box<dyn Any + Send + Sync>,
}

/// A named group of type maps registered together.
pub trait Profile {
    /// Returns the profile name, recorded in the built configuration.
    fn name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Registers this profile's maps.
    fn configure(&self, cfg: &mut MapperConfigurationBuilder);
}

/// Collects type maps before they are frozen into a [`MapperConfiguration`].
#[derive(Default)]
pub struct MapperConfigurationBuilder {
    maps: HashMap<TypePair, TypeMap>,
    duplicates: Vec<(&'static str, &'static str)>,
    profiles: Vec<&'static str>,
}

impl MapperConfigurationBuilder {
    /// Registers a map from `S` to `D`.
    ///
    /// Registering the same pair twice makes [`build`](Self::build) fail.
    pub fn create_map<S, D, F>(&mut self, map: F) -> &mut Self
    where
        S: 'static,
        D: 'static,
        F: Fn(&S) -> D + Send + Sync + 'static,
    {
        let pair = TypePair::of::<S, D>();
        let source_type = type_name::<S>();
        let destination_type = type_name::<D>();

        if self.maps.contains_key(&pair) {
            self.duplicates.push((source_type, destination_type));
            return self;
        }

        let map: Arc<MapFn<S, D>> = Arc::new(map);
        debug!(source_type, destination_type, "Registered type map");
        self.maps.insert(
            pair,
            TypeMap {
                source_type,
                destination_type,
                map: Box::new(map),
            },
        );
        self
    }

    /// Registers a map from `S` to `D` that uses `D`'s `From<&S>` conversion.
    pub fn create_map_from<S, D>(&mut self) -> &mut Self
    where
        S: 'static,
        D: for<'a> From<&'a S> + 'static,
    {
        self.create_map(|source: &S| D::from(source))
    }

    /// Registers every map of a profile.
    pub fn add_profile<P: Profile + ?Sized>(&mut self, profile: &P) -> &mut Self {
        profile.configure(self);
        self.profiles.push(profile.name());
        self
    }

    /// Freezes the registered maps.
    pub fn build(self) -> PageSampleResult<MapperConfiguration> {
        if let Some(&(source_type, destination_type)) = self.duplicates.first() {
            return Err(PageSampleError::DuplicateMapping {
                source_type,
                destination_type,
            });
        }

        info!(
            maps = self.maps.len(),
            profiles = ?self.profiles,
            "Mapper configuration built"
        );

        Ok(MapperConfiguration {
            maps: self.maps,
            profiles: self.profiles,
        })
    }
}

/// An immutable set of type maps, shared behind an `Arc`.
#[derive(Default)]
pub struct MapperConfiguration {
    maps: HashMap<TypePair, TypeMap>,
    profiles: Vec<&'static str>,
}

impl MapperConfiguration {
    /// Creates an empty builder.
    #[must_use]
    pub fn builder() -> MapperConfigurationBuilder {
        MapperConfigurationBuilder::default()
    }

    /// Builds a configuration from a registration closure.
    pub fn new<F>(configure: F) -> PageSampleResult<Self>
    where
        F: FnOnce(&mut MapperConfigurationBuilder),
    {
        let mut builder = Self::builder();
        configure(&mut builder);
        builder.build()
    }

    /// Returns the map from `S` to `D`, if one was registered.
    #[must_use]
    pub fn find_map<S: 'static, D: 'static>(&self) -> Option<Arc<MapFn<S, D>>> {
        self.maps
            .get(&TypePair::of::<S, D>())
            .and_then(|entry| entry.map.downcast_ref::<Arc<MapFn<S, D>>>())
            .cloned()
    }

    /// Returns the map from `S` to `D`, or `MappingNotFound`.
    pub fn resolve_map<S: 'static, D: 'static>(&self) -> PageSampleResult<Arc<MapFn<S, D>>> {
        self.find_map::<S, D>()
            .ok_or_else(PageSampleError::mapping_not_found::<S, D>)
    }

    /// Returns true if a map from `S` to `D` was registered.
    #[must_use]
    pub fn has_map<S: 'static, D: 'static>(&self) -> bool {
        self.maps.contains_key(&TypePair::of::<S, D>())
    }

    /// Returns the number of registered maps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Returns true if no map was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Returns the names of the profiles that were added, in order.
    #[must_use]
    pub fn profiles(&self) -> &[&'static str] {
        &self.profiles
    }

    /// Iterates over the registered `(source, destination)` type names.
    pub fn type_maps(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.maps
            .values()
            .map(|entry| (entry.source_type, entry.destination_type))
    }

    /// Creates a mapper sharing this configuration.
    #[must_use]
    pub fn create_mapper(self: Arc<Self>) -> Mapper {
        Mapper::new(self)
    }
}

impl fmt::Debug for MapperConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut maps: Vec<_> = self.type_maps().collect();
        maps.sort_unstable();
        f.debug_struct("MapperConfiguration")
            .field("maps", &maps)
            .field("profiles", &self.profiles)
            .finish()
    }
}
