use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level used when neither `--verbose` nor `RUST_LOG` is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so they never interleave with the drift report on
/// stdout. `--verbose` forces debug level; otherwise `RUST_LOG` is honored,
/// defaulting to [`DEFAULT_LEVEL`].
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    let filter_layer = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))?
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
