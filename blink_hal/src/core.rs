//! GPIO core struct and polling loop management.
//!
//! The `GpioCore` struct is the main entry point for GPIO operations.
//! It owns the active driver, the pin masks, and the polling loop that
//! blinks the LED while the button reads pressed.

use blink_common::gpio::config::BlinkConfig;
use blink_common::gpio::driver::{GpioDriver, GpioError};
use blink_common::gpio::registers::bit_mask;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::driver_registry::DriverRegistry;

/// Blocking hold used between the two halves of a blink cycle.
///
/// Production code sleeps on the current thread; tests substitute a
/// recording implementation so polling runs at synthetic time.
pub trait Delay: Send {
    /// Block for the given duration.
    fn hold(&mut self, duration: Duration);
}

/// Delay backed by `std::thread::sleep`.
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn hold(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Counters for polling loop monitoring.
#[derive(Debug, Default)]
struct BlinkStats {
    /// Number of polls executed
    poll_count: u64,
    /// Number of completed blink cycles
    blink_count: u64,
}

/// GPIO core: owns the driver, the pin masks and the polling loop.
pub struct GpioCore {
    /// Blink configuration
    config: BlinkConfig,
    /// Active driver instance
    driver: Option<Box<dyn GpioDriver>>,
    /// Hold primitive for blink timing
    delay: Box<dyn Delay>,
    /// Running flag for loop control
    running: Arc<AtomicBool>,
    /// Hold time for each half of a blink cycle
    blink_interval: Duration,
    /// Mask of the LED bit in the direction/output registers
    led_mask: u8,
    /// Mask of the button bit in the output/input registers
    button_mask: u8,
    /// Loop statistics
    stats: BlinkStats,
}

impl GpioCore {
    /// Create a new GpioCore instance with the given configuration.
    ///
    /// # Errors
    /// Returns error if configuration validation fails.
    pub fn new(config: BlinkConfig) -> Result<Self, GpioError> {
        config.validate()?;

        let blink_interval = Duration::from_millis(config.timing.blink_interval_ms);
        let led_mask = bit_mask(config.pins.led_bit);
        let button_mask = bit_mask(config.pins.button_bit);

        info!(
            "GpioCore created: led_bit={}, button_bit={}, blink_interval={}ms",
            config.pins.led_bit, config.pins.button_bit, config.timing.blink_interval_ms
        );

        Ok(Self {
            config,
            driver: None,
            delay: Box::new(ThreadDelay),
            running: Arc::new(AtomicBool::new(false)),
            blink_interval,
            led_mask,
            button_mask,
            stats: BlinkStats::default(),
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `GpioError::ConfigError` if the file cannot be read or parsed.
    pub fn load_config(config_path: &Path) -> Result<BlinkConfig, GpioError> {
        info!("Loading configuration from {:?}", config_path);

        let content = fs::read_to_string(config_path).map_err(|e| {
            GpioError::ConfigError(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            GpioError::ConfigError(format!(
                "Failed to parse config file {:?}: {}",
                config_path, e
            ))
        })
    }

    /// Initialize the core: create the named driver and configure the pins.
    ///
    /// # Errors
    /// Returns error if the driver is unknown or fails to initialize.
    pub fn init(&mut self, registry: &DriverRegistry, driver_name: &str) -> Result<(), GpioError> {
        info!("Initializing GpioCore with driver '{}'...", driver_name);
        let driver = registry.create_driver(driver_name)?;
        self.init_with_driver(driver)
    }

    /// Initialize the core with a pre-built driver instance.
    ///
    /// Performs the one-time pin setup after the driver comes up: the
    /// direction register is written whole with only the LED bit set
    /// (every other pin stays an input), then the button bit in the
    /// output register is set to enable its pull-up without touching
    /// other output bits.
    ///
    /// # Errors
    /// Returns error if driver initialization fails.
    pub fn init_with_driver(&mut self, mut driver: Box<dyn GpioDriver>) -> Result<(), GpioError> {
        info!("Using driver: {} v{}", driver.name(), driver.version());

        driver.init(&self.config)?;

        driver.write_direction(self.led_mask);
        driver.set_output_bits(self.button_mask);
        debug!(
            "Pins configured: direction={:#010b}, output={:#010b}",
            driver.direction_register(),
            driver.output_register()
        );

        self.driver = Some(driver);

        info!("GpioCore initialized successfully");
        Ok(())
    }

    /// Sample the input register and mask to the button bit.
    ///
    /// True iff the button bit reads high, independent of every other
    /// input bit. No side effects on register state.
    pub fn is_button_pressed(&mut self, now: Instant) -> bool {
        match self.driver.as_mut() {
            Some(driver) => driver.read_input(now) & self.button_mask != 0,
            None => false,
        }
    }

    /// Set the LED output bit, preserving all other bits.
    pub fn led_on(&mut self) {
        if let Some(driver) = self.driver.as_mut() {
            driver.set_output_bits(self.led_mask);
        }
    }

    /// Clear the LED output bit, preserving all other bits.
    pub fn led_off(&mut self) {
        if let Some(driver) = self.driver.as_mut() {
            driver.clear_output_bits(self.led_mask);
        }
    }

    /// Execute one polling iteration.
    ///
    /// Button pressed: LED on, hold, LED off, hold (one blink cycle).
    /// Not pressed: LED off, no hold. Behavior is a pure function of the
    /// current sample; a press landing mid-cycle is picked up on the next
    /// poll.
    ///
    /// Returns the sampled button state.
    pub fn poll_once(&mut self, now: Instant) -> bool {
        let pressed = self.is_button_pressed(now);

        if pressed {
            self.led_on();
            self.delay.hold(self.blink_interval);
            self.led_off();
            self.delay.hold(self.blink_interval);
            self.stats.blink_count += 1;
        } else {
            self.led_off();
        }

        self.stats.poll_count += 1;
        pressed
    }

    /// Run the polling loop.
    ///
    /// This method blocks until shutdown is requested via signal. On
    /// bare hardware this loop would run until power-off; on a hosted
    /// target the running flag gives a clean stop.
    ///
    /// # Errors
    /// Returns error if no driver has been initialized.
    pub fn run(&mut self) -> Result<(), GpioError> {
        if self.driver.is_none() {
            return Err(GpioError::InitFailed("Driver not initialized".to_string()));
        }

        info!(
            "Starting polling loop (blink_interval={}ms)...",
            self.blink_interval.as_millis()
        );
        self.running.store(true, Ordering::SeqCst);

        if detect_rt_mode() {
            info!("Running in real-time mode");
        } else {
            info!("Running in standard (non-RT) mode");
        }

        let mut last_pressed = false;

        while self.running.load(Ordering::SeqCst) {
            let pressed = self.poll_once(Instant::now());

            if pressed != last_pressed {
                info!("Button {}", if pressed { "pressed" } else { "released" });
                last_pressed = pressed;
            }

            if self.stats.poll_count % 100_000 == 0 {
                debug!(
                    "Polling loop: {} polls, {} blink cycles",
                    self.stats.poll_count, self.stats.blink_count
                );
            }
        }

        info!(
            "Polling loop stopped after {} polls ({} blink cycles)",
            self.stats.poll_count, self.stats.blink_count
        );
        Ok(())
    }

    /// Request shutdown of the polling loop.
    pub fn shutdown(&mut self) -> Result<(), GpioError> {
        info!("Shutdown requested");
        self.running.store(false, Ordering::SeqCst);

        if let Some(driver) = self.driver.as_mut() {
            driver.shutdown()?;
        }

        Ok(())
    }

    /// Get the running flag for signal handlers.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Replace the delay implementation (tests, alternate timers).
    pub fn set_delay(&mut self, delay: Box<dyn Delay>) {
        self.delay = delay;
    }

    /// Current value of the direction register, if a driver is attached.
    pub fn direction_register(&self) -> Option<u8> {
        self.driver.as_ref().map(|d| d.direction_register())
    }

    /// Current value of the output register, if a driver is attached.
    pub fn output_register(&self) -> Option<u8> {
        self.driver.as_ref().map(|d| d.output_register())
    }

    /// Loop statistics: (polls, blink cycles).
    pub fn stats(&self) -> (u64, u64) {
        (self.stats.poll_count, self.stats.blink_count)
    }
}

/// Detect if running in real-time mode by checking scheduler policy.
fn detect_rt_mode() -> bool {
    #[cfg(target_os = "linux")]
    {
        use libc::{SCHED_FIFO, SCHED_RR, sched_getscheduler};
        unsafe {
            let policy = sched_getscheduler(0);
            policy == SCHED_FIFO || policy == SCHED_RR
        }
    }
    #[cfg(not(target_os = "linux"))]
    {
        false
    }
}
