//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence; otherwise the level follows the CLI
//! verbosity (default warn, `-v` info, `-vv` debug, `-vvv` trace).

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("storybook={level},warn")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(verbosity >= 2).with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
