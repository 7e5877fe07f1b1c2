use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::factory::helpers::BUILTIN_DRIVERS;
use crate::factory::structs::cache_factory::CacheFactory;
use crate::factory::structs::driver_descriptor::DriverDescriptor;
use crate::factory::structs::driver_parameters::DriverParameters;
use ahash::AHashMap;
use log::{debug, info};
use serde_json::{Map, Value};
use std::sync::Arc;

impl Default for CacheFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheFactory {
    /// A factory that knows every built-in driver.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        for descriptor in BUILTIN_DRIVERS {
            factory.register(*descriptor);
        }
        factory
    }

    pub fn empty() -> Self {
        Self {
            drivers: AHashMap::new(),
        }
    }

    /// Adds a driver, replacing any previous one of the same name.
    pub fn register(&mut self, descriptor: DriverDescriptor) -> Option<DriverDescriptor> {
        self.drivers.insert(descriptor.name, descriptor)
    }

    pub fn supports(&self, driver: &str) -> bool {
        self.drivers.contains_key(driver)
    }

    pub fn descriptor(&self, driver: &str) -> Option<&DriverDescriptor> {
        self.drivers.get(driver)
    }

    /// Registered driver names, sorted.
    pub fn drivers(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.drivers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub async fn build(
        &self,
        driver: &str,
        parameters: &Map<String, Value>,
    ) -> Result<Arc<dyn CacheBackend>, CacheError> {
        let descriptor = self
            .drivers
            .get(driver)
            .ok_or_else(|| CacheError::UnsupportedDriver(driver.to_string()))?;
        let params = DriverParameters::new(descriptor.name, parameters);
        params.require(descriptor.required)?;
        debug!("[Factory] Building {} cache", descriptor.name);
        let backend = (descriptor.constructor)(self, params).await?;
        info!("[Factory] {} cache ready", descriptor.name);
        Ok(backend)
    }
}
