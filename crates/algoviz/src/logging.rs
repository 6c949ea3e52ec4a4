//! Tracing initialization for the binaries. The library itself only emits
//! `tracing` events.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-target filter directives.
pub const LOG_ENV: &str = "ALGOVIZ_LOG";

static INIT: Once = Once::new();

/// Installs a stderr subscriber filtered by `ALGOVIZ_LOG`.
///
/// Format: `ALGOVIZ_LOG=algoviz::stream=trace,algoviz::topology=debug`.
/// Falls back to `algoviz=info` when the variable is unset or invalid.
/// Calling it again is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("algoviz=info"));

        // Another global subscriber (e.g. a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
