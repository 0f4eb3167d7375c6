//! Simulation driver module.
//!
//! This module provides an in-memory GPIO register bank for development
//! and testing without physical hardware.

mod driver;
mod schedule;

pub use driver::SimulatedGpio;
pub use schedule::ButtonSchedule;

use blink_common::gpio::driver::GpioDriver;

/// Factory function to create a simulation driver instance.
pub fn create_driver() -> Box<dyn GpioDriver> {
    Box::new(SimulatedGpio::new())
}
