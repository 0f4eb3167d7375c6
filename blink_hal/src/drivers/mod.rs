//! GPIO driver implementations.
//!
//! This module contains all GPIO driver implementations:
//!
//! - [`simulation`] - In-memory register bank for development and testing
//!
//! # Adding New Drivers
//!
//! 1. Create a new submodule under `drivers/`
//! 2. Implement the `GpioDriver` trait from `blink_common::gpio::driver`
//! 3. Register the driver in `register_builtin_drivers()`

pub mod simulation;

use crate::driver_registry::DriverRegistry;

/// Register all built-in drivers into the given registry.
///
/// Called once at startup before any drivers are requested.
pub fn register_builtin_drivers(registry: &mut DriverRegistry) {
    registry.register("simulation", simulation::create_driver);

    // Future backends will be registered here:
    // registry.register("mmio", mmio::create_driver);
    // registry.register("sysfs", sysfs::create_driver);
}
