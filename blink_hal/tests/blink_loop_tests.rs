//! End-to-end polling loop tests.
//!
//! Exercises the whole stack the binary wires together: TOML config from
//! a real file, driver registry, simulation driver with scripted button
//! input, and the polling core with a recording delay at synthetic time.

use blink_hal::core::{Delay, GpioCore};
use blink_hal::driver_registry::DriverRegistry;
use blink_hal::drivers::register_builtin_drivers;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

/// Delay that records holds instead of sleeping.
struct RecordingDelay {
    holds: Arc<Mutex<Vec<Duration>>>,
}

impl Delay for RecordingDelay {
    fn hold(&mut self, duration: Duration) {
        self.holds.lock().unwrap().push(duration);
    }
}

/// Write a config file and build an initialized core around the
/// simulation driver. Returns the core and the recorded holds.
fn core_from_toml(toml_str: &str) -> (GpioCore, Arc<Mutex<Vec<Duration>>>) {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(toml_str.as_bytes()).expect("write config");

    let config = GpioCore::load_config(file.path()).expect("config should load");

    let mut registry = DriverRegistry::new();
    register_builtin_drivers(&mut registry);

    let holds = Arc::new(Mutex::new(Vec::new()));
    let mut core = GpioCore::new(config).expect("config should validate");
    core.set_delay(Box::new(RecordingDelay {
        holds: Arc::clone(&holds),
    }));
    core.init(&registry, "simulation").expect("init");

    (core, holds)
}

#[test]
fn initialization_configures_pins_from_reset_state() {
    let (core, _holds) = core_from_toml("");

    // LED bit (1) is the only output; button bit (5) has its pull-up set.
    assert_eq!(core.direction_register(), Some(0b0000_0010));
    assert_eq!(core.output_register(), Some(0b0010_0000));
}

#[test]
fn pressed_button_blinks_released_button_stays_off() {
    let toml_str = r#"
        [[simulation.button_events]]
        at_ms = 0
        pressed = true

        [[simulation.button_events]]
        at_ms = 50
        pressed = false
    "#;
    let (mut core, holds) = core_from_toml(toml_str);
    let start = Instant::now();

    // First poll samples the scripted press: one full blink cycle.
    assert!(core.poll_once(start));
    assert_eq!(
        *holds.lock().unwrap(),
        vec![Duration::from_millis(100), Duration::from_millis(100)]
    );
    // LED ends cleared, pull-up untouched.
    assert_eq!(core.output_register(), Some(0b0010_0000));

    // After the scripted release: LED off, no further holds.
    assert!(!core.poll_once(start + Duration::from_millis(60)));
    assert_eq!(holds.lock().unwrap().len(), 2);
    assert_eq!(core.output_register(), Some(0b0010_0000));

    assert_eq!(core.stats(), (2, 1));
}

#[test]
fn idle_polling_invokes_no_delay() {
    let (mut core, holds) = core_from_toml("");
    let start = Instant::now();

    for i in 0..10u64 {
        assert!(!core.poll_once(start + Duration::from_millis(i)));
    }

    assert!(holds.lock().unwrap().is_empty());
    assert_eq!(core.stats(), (10, 0));
}

#[test]
fn button_state_independent_of_other_input_bits() {
    // All non-button input bits high: still not pressed.
    let toml_str = r#"
        [simulation]
        initial_input = 0b1101_1111
    "#;
    let (mut core, holds) = core_from_toml(toml_str);

    assert!(!core.poll_once(Instant::now()));
    assert!(holds.lock().unwrap().is_empty());

    // Only the button bit high: pressed.
    let toml_str = r#"
        [simulation]
        initial_input = 0b0010_0000
    "#;
    let (mut core, _holds) = core_from_toml(toml_str);
    assert!(core.poll_once(Instant::now()));
}

#[test]
fn custom_pins_and_interval() {
    let toml_str = r#"
        [pins]
        led_bit = 0
        button_bit = 7

        [timing]
        blink_interval_ms = 20

        [simulation]
        initial_input = 0b1000_0000
    "#;
    let (mut core, holds) = core_from_toml(toml_str);

    assert_eq!(core.direction_register(), Some(0b0000_0001));
    assert_eq!(core.output_register(), Some(0b1000_0000));

    assert!(core.poll_once(Instant::now()));
    assert_eq!(
        *holds.lock().unwrap(),
        vec![Duration::from_millis(20), Duration::from_millis(20)]
    );
}

#[test]
fn unknown_driver_is_rejected() {
    let mut registry = DriverRegistry::new();
    register_builtin_drivers(&mut registry);

    let config = blink_common::gpio::config::BlinkConfig::default();
    let mut core = GpioCore::new(config).expect("valid config");
    assert!(core.init(&registry, "ethercat").is_err());
}

#[test]
fn malformed_config_file_is_rejected() {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(b"[pins\nled_bit = ").expect("write config");

    assert!(GpioCore::load_config(file.path()).is_err());
}
