//! GPIO constants.
//!
//! Default bit assignments match the reference board wiring: LED on
//! pin 9 (port bit 1), button on pin 13 (port bit 5).

/// Canonical service name (used for logging).
pub const BLINK_SERVICE_NAME: &str = "blink_hal";

/// Default bit index of the LED pin in the direction/output registers.
pub const LED_BIT: u8 = 1;

/// Default bit index of the button pin in the output/input registers.
pub const BUTTON_BIT: u8 = 5;

/// Width of each register in bits. Valid bit indices are 0..REGISTER_WIDTH.
pub const REGISTER_WIDTH: u8 = 8;

/// Default blink interval in milliseconds (hold time for each half cycle).
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 100;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "/etc/blink/blink.toml";
