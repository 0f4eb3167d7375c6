//! Blink configuration types.
//!
//! This module contains the configuration loaded from `blink.toml`:
//! - `BlinkConfig` - Top-level configuration
//! - `PinConfig` - Bit assignments for the LED and button pins
//! - `TimingConfig` - Blink interval
//! - `SimulationConfig` / `ButtonEvent` - Scripted input for the
//!   simulation driver

use crate::gpio::consts::{BUTTON_BIT, DEFAULT_BLINK_INTERVAL_MS, LED_BIT, REGISTER_WIDTH};
use crate::gpio::driver::GpioError;
use serde::{Deserialize, Serialize};

/// Default function for led_bit
fn default_led_bit() -> u8 {
    LED_BIT
}

/// Default function for button_bit
fn default_button_bit() -> u8 {
    BUTTON_BIT
}

/// Default function for blink_interval_ms
fn default_blink_interval_ms() -> u64 {
    DEFAULT_BLINK_INTERVAL_MS
}

/// Main configuration loaded from `blink.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlinkConfig {
    /// Pin bit assignments.
    #[serde(default)]
    pub pins: PinConfig,

    /// Timing parameters.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Simulation driver settings. Ignored by hardware backends.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Bit assignments for the two pins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinConfig {
    /// Bit index of the LED pin in the direction/output registers.
    #[serde(default = "default_led_bit")]
    pub led_bit: u8,

    /// Bit index of the button pin in the output/input registers.
    #[serde(default = "default_button_bit")]
    pub button_bit: u8,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            led_bit: LED_BIT,
            button_bit: BUTTON_BIT,
        }
    }
}

/// Timing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Hold time for each half of a blink cycle, in milliseconds.
    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
        }
    }
}

/// Simulation driver settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Initial value of the input register at driver init.
    #[serde(default)]
    pub initial_input: u8,

    /// Scripted input transitions on the button bit.
    #[serde(default)]
    pub button_events: Vec<ButtonEvent>,
}

/// One scripted transition of the simulated button input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ButtonEvent {
    /// Offset from simulation start, in milliseconds.
    pub at_ms: u64,
    /// Level the button bit takes at that time (true = pressed).
    pub pressed: bool,
}

impl BlinkConfig {
    /// Validate the configuration.
    ///
    /// # Validation Rules
    /// 1. `led_bit` and `button_bit` < REGISTER_WIDTH
    /// 2. `led_bit` != `button_bit`
    /// 3. `blink_interval_ms` > 0
    pub fn validate(&self) -> Result<(), GpioError> {
        if self.pins.led_bit >= REGISTER_WIDTH {
            return Err(GpioError::ConfigError(format!(
                "led_bit {} out of range (register width {})",
                self.pins.led_bit, REGISTER_WIDTH
            )));
        }

        if self.pins.button_bit >= REGISTER_WIDTH {
            return Err(GpioError::ConfigError(format!(
                "button_bit {} out of range (register width {})",
                self.pins.button_bit, REGISTER_WIDTH
            )));
        }

        if self.pins.led_bit == self.pins.button_bit {
            return Err(GpioError::ConfigError(format!(
                "led_bit and button_bit must differ (both {})",
                self.pins.led_bit
            )));
        }

        if self.timing.blink_interval_ms == 0 {
            return Err(GpioError::ConfigError(
                "blink_interval_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BlinkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pins.led_bit, 1);
        assert_eq!(config.pins.button_bit, 5);
        assert_eq!(config.timing.blink_interval_ms, 100);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: BlinkConfig = toml::from_str("").expect("empty config should parse");
        assert!(config.validate().is_ok());
        assert_eq!(config.simulation.initial_input, 0);
        assert!(config.simulation.button_events.is_empty());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
            [pins]
            led_bit = 2
            button_bit = 6

            [timing]
            blink_interval_ms = 250

            [simulation]
            initial_input = 0b0100_0000

            [[simulation.button_events]]
            at_ms = 50
            pressed = true

            [[simulation.button_events]]
            at_ms = 500
            pressed = false
        "#;

        let config: BlinkConfig = toml::from_str(toml_str).expect("should parse");
        assert!(config.validate().is_ok());
        assert_eq!(config.pins.led_bit, 2);
        assert_eq!(config.pins.button_bit, 6);
        assert_eq!(config.timing.blink_interval_ms, 250);
        assert_eq!(config.simulation.initial_input, 0b0100_0000);
        assert_eq!(config.simulation.button_events.len(), 2);
        assert_eq!(config.simulation.button_events[0].at_ms, 50);
        assert!(config.simulation.button_events[0].pressed);
    }

    fn config_with_pins(led_bit: u8, button_bit: u8) -> BlinkConfig {
        BlinkConfig {
            pins: PinConfig { led_bit, button_bit },
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_bits() {
        let config = config_with_pins(8, 5);
        assert!(matches!(config.validate(), Err(GpioError::ConfigError(_))));

        let config = config_with_pins(1, 12);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_shared_bit() {
        let config = config_with_pins(3, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = BlinkConfig {
            timing: TimingConfig {
                blink_interval_ms: 0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
