//! Logging setup.
//!
//! Installs a `tracing-subscriber` formatter writing to stderr. The filter is
//! fixed rather than read from the environment: the editor takes no external
//! configuration.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used for the whole process.
pub const DEFAULT_LOG_FILTER: &str = "plain_pad=info,PlainPad=info,warn";

/// Initializes the global subscriber.
///
/// Idempotent: a second call (or a subscriber already installed by a test
/// harness) is ignored.
pub fn init_logging() {
    let filter = EnvFilter::new(DEFAULT_LOG_FILTER);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized");
    }
}
