//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::ENV_LOG;

static INIT: Once = Once::new();

/// Initialize logging for the host process.
///
/// Reads `CHALLENGE_LOG` for per-crate levels, e.g.
/// `CHALLENGE_LOG=challenge_scoring=debug,challenge_tracker=info`.
/// Falls back to `info` when unset or invalid. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
