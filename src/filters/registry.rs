use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{RegistryError, Result},
    filters::{BrightnessFilter, DynFilter, GridFilter},
};

type FilterFactory = Box<dyn Fn() -> Result<Box<dyn DynFilter>> + Send + Sync>;

/// Registry for managing available filters
///
/// The registry provides a central place to discover and instantiate filters.
/// Filters are registered by key and built on demand; building a filter
/// validates its option declarations, so a bad declaration surfaces as an
/// error from [`FilterRegistry::get_filter`].
pub struct FilterRegistry {
    filters: HashMap<String, FilterFactory>,
}

impl FilterRegistry {
    /// Create a new filter registry with all built-in filters
    pub fn new() -> Self {
        let mut registry = Self {
            filters: HashMap::new(),
        };

        registry.register_builtin_filters();
        registry
    }

    fn register_builtin_filters(&mut self) {
        self.register("grid", || Ok(Box::new(GridFilter::new()?)));
        self.register("brightness", || Ok(Box::new(BrightnessFilter::new()?)));
    }

    /// Register a custom filter under `key`, replacing any existing entry
    pub fn register<K, F>(&mut self, key: K, factory: F)
    where
        K: Into<String>,
        F: Fn() -> Result<Box<dyn DynFilter>> + Send + Sync + 'static,
    {
        self.filters.insert(key.into(), Box::new(factory));
    }

    /// Build a new instance of the filter registered under `key`
    pub fn get_filter(&self, key: &str) -> Result<Box<dyn DynFilter>> {
        let factory = self.filters.get(key).ok_or_else(|| RegistryError::NotFound {
            name: key.to_string(),
        })?;

        debug!("Building filter '{}'", key);
        factory().map_err(|e| {
            RegistryError::BuildFailed {
                name: key.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// All registered keys, sorted
    pub fn available_filters(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.filters.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn has_filter(&self, key: &str) -> bool {
        self.filters.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
