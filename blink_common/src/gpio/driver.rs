//! GPIO driver trait and error types.
//!
//! This module defines:
//! - `GpioDriver` trait - Interface for pluggable GPIO backends
//! - `GpioError` enum - Error types for GPIO operations
//! - `DriverFactory` type alias - Factory function type

use crate::gpio::config::BlinkConfig;
use std::time::Instant;
use thiserror::Error;

/// Error types for GPIO operations.
///
/// Register accesses themselves cannot fail; errors exist only at the
/// configuration and driver-lookup edges.
#[derive(Debug, Clone, Error)]
pub enum GpioError {
    /// Driver initialization failed
    #[error("Initialization failed: {0}")]
    InitFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Driver not found
    #[error("Driver not found: {0}")]
    DriverNotFound(String),
}

/// Factory function type for creating driver instances.
pub type DriverFactory = fn() -> Box<dyn GpioDriver>;

/// Trait defining the interface for GPIO backends.
///
/// The polling core talks to hardware exclusively through this trait,
/// enabling pluggable backends (simulation, memory-mapped ports, sysfs).
///
/// # Lifecycle
///
/// 1. `init()` - Called once before the polling loop starts
/// 2. Register accessors - Called every loop iteration
/// 3. `shutdown()` - Called when the core is stopping
///
/// Register accessors are plain read-modify-write operations and cannot
/// fail; only `init()` and `shutdown()` return results.
pub trait GpioDriver: Send + Sync {
    /// Returns the driver's unique identifier (e.g., "simulation").
    fn name(&self) -> &'static str;

    /// Returns the driver's semantic version.
    fn version(&self) -> &'static str;

    /// Initialize the driver with the blink configuration.
    ///
    /// Called once by the core before entering the polling loop. The
    /// driver should bring its register surface to the hardware reset
    /// state (or the configured simulated state).
    ///
    /// # Errors
    /// Return `GpioError::InitFailed` if initialization cannot complete.
    fn init(&mut self, config: &BlinkConfig) -> Result<(), GpioError>;

    /// Replace the direction register (1 = output per bit).
    ///
    /// Called once during pin initialization; the direction register is
    /// not mutated afterwards.
    fn write_direction(&mut self, value: u8);

    /// OR the mask into the output register, preserving other bits.
    fn set_output_bits(&mut self, mask: u8);

    /// Clear the masked bits of the output register, preserving other bits.
    fn clear_output_bits(&mut self, mask: u8);

    /// Read the input register.
    ///
    /// `now` is the sampling instant; simulated backends use it to apply
    /// scripted input transitions whose time has arrived.
    fn read_input(&mut self, now: Instant) -> u8;

    /// Current value of the direction register.
    fn direction_register(&self) -> u8;

    /// Current value of the output register.
    fn output_register(&self) -> u8;

    /// Graceful shutdown of the driver.
    ///
    /// # Errors
    /// Backends holding hardware handles may fail to release them.
    fn shutdown(&mut self) -> Result<(), GpioError>;
}
