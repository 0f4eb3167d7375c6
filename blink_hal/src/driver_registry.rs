//! Driver registry for GPIO drivers.
//!
//! Provides a `DriverRegistry` struct for registering and retrieving GPIO
//! driver factories. This uses constructor-injection rather than global
//! state.

use blink_common::gpio::driver::{DriverFactory, GpioDriver, GpioError};
use std::collections::HashMap;

/// Registry of available GPIO drivers.
///
/// Constructed at startup, populated via `register()`, and consulted by
/// `GpioCore::init`. No global state — testable in isolation.
pub struct DriverRegistry {
    factories: HashMap<&'static str, DriverFactory>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a driver factory.
    ///
    /// # Panics
    /// Panics if a driver with the same name is already registered.
    pub fn register(&mut self, name: &'static str, factory: DriverFactory) {
        if self.factories.contains_key(name) {
            panic!("Driver '{name}' is already registered");
        }
        self.factories.insert(name, factory);
    }

    /// Get a driver factory by name.
    pub fn get_factory(&self, name: &str) -> Option<DriverFactory> {
        self.factories.get(name).copied()
    }

    /// Create a driver instance by name.
    ///
    /// # Errors
    /// Returns `GpioError::DriverNotFound` if no driver with the given name
    /// is registered.
    pub fn create_driver(&self, name: &str) -> Result<Box<dyn GpioDriver>, GpioError> {
        let factory = self
            .get_factory(name)
            .ok_or_else(|| GpioError::DriverNotFound(name.to_string()))?;
        Ok(factory())
    }

    /// List all registered driver names.
    pub fn list_drivers(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
