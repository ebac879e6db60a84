/// radio-static — tunes into the void once and archives what it hears.
///
/// Usage: radio-static
///
/// Environment:
///   ANTHROPIC_API_KEY                — credential for the generation service
///   ANTHROPIC_BASE_URL               — endpoint override (optional)
///   RADIO_STATIC_ARCHIVE_DIR         — where transmissions are written (optional)
///   RADIO_STATIC_RARE_PREFIX_CHANCE  — 0.0..=1.0 chance of a flagged broadcast (optional)
///   RUST_LOG                         — log filter for stderr diagnostics (default: warn)
///
/// Recurring broadcasts are left to an external scheduler such as cron.
use radio_static::core::archive::Archive;
use radio_static::core::config::RadioConfig;
use radio_static::core::receiver::AnthropicReceiver;
use radio_static::core::station::{self, Station, StationError, EXIT_FAILURE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = RadioConfig::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let receiver = match AnthropicReceiver::new(config.receiver) {
        Ok(receiver) => receiver,
        Err(e) => {
            let _ = station::report_failure(&mut out, &StationError::from(e));
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let station = Station::new(receiver, Archive::new(config.archive_dir))
        .with_rare_prefix_chance(config.rare_prefix_chance);
    let mut rng = StdRng::from_entropy();

    let status = match station::run(&station, &mut rng, &mut out) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error writing to stdout: {}", e);
            EXIT_FAILURE
        }
    };
    out.flush().ok();
    ExitCode::from(status)
}
