//! Lettermix demo entry point.

use std::sync::Mutex;

use lettermix_core::clock::SystemClock;
use lettermix_core::rng::Lcg;
use lettermix_demo::config::{DemoConfig, LogFormat};
use lettermix_demo::walkthrough::{self, DemoError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DemoError> {
    // Read configuration from environment.
    let config = DemoConfig::from_env()?;

    // Initialize tracing subscriber; stdout is reserved for the panels.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }

    let clock = SystemClock;
    let lcg = match config.seed {
        Some(seed) => Lcg::with_seed(seed),
        None => Lcg::from_clock(&clock),
    };
    tracing::info!(seed = lcg.seed(), explicit = config.seed.is_some(), "generator seeded");
    let rng = Mutex::new(lcg);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    walkthrough::run(&config, &clock, &rng, &mut out)?;

    Ok(())
}
