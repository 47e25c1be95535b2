//! Icongen - shared entry point for the icon binaries

use std::io::{self, Write};
use std::process::ExitCode;

use icongen_config::{BatchConfig, LogConfig};
use icongen_icons::IconSet;
use tracing::error;

/// Install the stderr log subscriber
///
/// Stdout is left to the `Created ...` progress lines. Returns false when a
/// subscriber was already installed, which is kept.
pub fn init_logging(config: LogConfig) -> bool {
    let result = tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("log subscriber already set");
        return false;
    }
    true
}

/// Write `set` for every default size into the default output directory
pub fn generate(set: &IconSet) -> ExitCode {
    init_logging(LogConfig::default());
    generate_with(set, &BatchConfig::default(), &mut io::stdout().lock())
}

/// Write `set` as configured, mapping any failure to a non-zero exit status
pub fn generate_with<W: Write>(set: &IconSet, config: &BatchConfig, out: &mut W) -> ExitCode {
    match icongen_icons::run(set, config, out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{} icon generation failed: {}", set.name, err);
            ExitCode::FAILURE
        }
    }
}
