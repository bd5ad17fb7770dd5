use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the stderr tracing subscriber.
///
/// Nothing is installed unless `--verbose` is given or `RUST_LOG` is set, so
/// failures are reported once, by `main`. `RUST_LOG` takes precedence over the
/// `debug` default that `--verbose` selects.
pub fn init(verbose: bool) -> Result<()> {
    let from_env = EnvFilter::try_from_default_env().ok();
    if from_env.is_none() && !verbose {
        return Ok(());
    }

    let filter_layer = match from_env {
        Some(filter) => filter,
        None => EnvFilter::try_new("debug")
            .map_err(|e| CliError::user(format!("invalid log filter: {e}")))?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::user(format!("failed to set up logging: {e}")))
}
