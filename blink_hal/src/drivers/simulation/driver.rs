//! Simulation driver implementation.
//!
//! The `SimulatedGpio` driver implements the `GpioDriver` trait over an
//! in-memory register bank, so the polling core can run and be tested on
//! a host without physical hardware.

use super::schedule::ButtonSchedule;
use blink_common::gpio::config::BlinkConfig;
use blink_common::gpio::driver::{GpioDriver, GpioError};
use blink_common::gpio::registers::RegisterBank;
use std::time::Instant;
use tracing::{debug, info};

/// Simulation driver implementing the GpioDriver trait.
pub struct SimulatedGpio {
    /// Driver name
    name: &'static str,
    /// Driver version
    version: &'static str,
    /// Initialized flag
    initialized: bool,
    /// Simulated register bank
    bank: RegisterBank,
    /// Scripted button input transitions
    schedule: Option<ButtonSchedule>,
}

impl SimulatedGpio {
    /// Create a new simulation driver instance.
    pub fn new() -> Self {
        Self {
            name: "simulation",
            version: env!("CARGO_PKG_VERSION"),
            initialized: false,
            bank: RegisterBank::new(),
            schedule: None,
        }
    }

    /// Drive a single input register bit directly.
    #[cfg(test)]
    pub(crate) fn drive_input_bit(&mut self, bit: u8, level: bool) {
        self.bank.drive_input_bit(bit, level);
    }

    /// Current value of the input register.
    #[cfg(test)]
    pub(crate) fn input_register(&self) -> u8 {
        self.bank.input
    }
}

impl Default for SimulatedGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioDriver for SimulatedGpio {
    fn name(&self) -> &'static str {
        self.name
    }

    fn version(&self) -> &'static str {
        self.version
    }

    fn init(&mut self, config: &BlinkConfig) -> Result<(), GpioError> {
        info!(
            "Initializing simulation driver: initial_input={:#010b}, {} scripted button events",
            config.simulation.initial_input,
            config.simulation.button_events.len()
        );

        // Hardware reset state, then the configured input levels.
        self.bank = RegisterBank::new();
        self.bank.input = config.simulation.initial_input;

        self.schedule = Some(ButtonSchedule::new(
            &config.simulation.button_events,
            config.pins.button_bit,
        ));

        self.initialized = true;
        Ok(())
    }

    fn write_direction(&mut self, value: u8) {
        self.bank.write_direction(value);
    }

    fn set_output_bits(&mut self, mask: u8) {
        self.bank.set_output_bits(mask);
    }

    fn clear_output_bits(&mut self, mask: u8) {
        self.bank.clear_output_bits(mask);
    }

    fn read_input(&mut self, now: Instant) -> u8 {
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.apply_due(&mut self.bank, now);
        }
        self.bank.input
    }

    fn direction_register(&self) -> u8 {
        self.bank.direction
    }

    fn output_register(&self) -> u8 {
        self.bank.output
    }

    fn shutdown(&mut self) -> Result<(), GpioError> {
        if self.initialized {
            debug!("Simulation driver shutting down");
        }
        self.initialized = false;
        Ok(())
    }
}
