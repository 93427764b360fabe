//! Tracing initialization

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `MASTERMIND_LOG=mastermind_solver=debug`
pub const LOG_ENV: &str = "MASTERMIND_LOG";

/// Initialize logging to stderr
///
/// Reads the filter from `MASTERMIND_LOG` and falls back to `warn` when it is
/// unset or invalid. Later calls do nothing.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber installed by an embedding application wins
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::warn!("logging initialized twice");
    }
}
