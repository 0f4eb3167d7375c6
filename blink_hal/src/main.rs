//! # Blink HAL Binary
//!
//! GPIO polling loop: blinks an LED pin while a button pin reads pressed,
//! through a pluggable driver backend.
//!
//! # Usage
//!
//! ```bash
//! # Run with simulation driver and default config
//! blink_hal --simulate
//!
//! # Run with a specific config file
//! blink_hal --config config/blink.toml -s
//!
//! # Verbose logging
//! blink_hal -s -v
//! ```

#![deny(warnings)]

use blink_common::gpio::config::BlinkConfig;
use blink_common::gpio::consts::DEFAULT_CONFIG_PATH;
use blink_hal::core::GpioCore;
use blink_hal::driver_registry::DriverRegistry;
use blink_hal::drivers::register_builtin_drivers;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// Blink HAL - GPIO polling loop with pluggable drivers
#[derive(Parser, Debug)]
#[command(name = "blink_hal")]
#[command(version)]
#[command(about = "GPIO button-blink polling loop with pluggable driver architecture")]
#[command(long_about = None)]
struct Args {
    /// Path to configuration file (blink.toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Force simulation driver
    #[arg(short = 's', long)]
    simulate: bool,

    /// Load specific driver (can be specified multiple times)
    #[arg(short, long = "driver", action = clap::ArgAction::Append)]
    drivers: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("Blink HAL startup failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    setup_tracing(&args);

    info!("Blink HAL v{} starting...", env!("CARGO_PKG_VERSION"));

    // Determine driver to use
    let driver_name = if args.simulate {
        info!("Simulation mode enabled");
        "simulation".to_string()
    } else if !args.drivers.is_empty() {
        info!("Drivers from CLI: {:?}", args.drivers);
        args.drivers[0].clone()
    } else {
        "simulation".to_string()
    };

    // Missing config file is not an error: the defaults describe the
    // reference board wiring.
    let config = if args.config.exists() {
        GpioCore::load_config(&args.config)?
    } else {
        info!(
            "No config file at {:?}, using built-in defaults",
            args.config
        );
        BlinkConfig::default()
    };

    let mut registry = DriverRegistry::new();
    register_builtin_drivers(&mut registry);

    let mut core = GpioCore::new(config)?;

    // Setup signal handler.
    let running = core.running_flag();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        running.store(false, Ordering::SeqCst);
    })?;

    core.init(&registry, &driver_name)?;

    if let Err(e) = core.run() {
        error!("Polling loop error: {}", e);
    }

    core.shutdown()?;

    info!("Blink HAL shutdown complete");
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
