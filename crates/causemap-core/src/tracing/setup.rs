//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target filter directives.
pub const LOG_ENV_VAR: &str = "CAUSEMAP_LOG";

/// Directives used when `CAUSEMAP_LOG` is unset or unparseable.
pub const DEFAULT_DIRECTIVES: &str = "causemap_core=info,causemap_analysis=info,causemap_cli=info";

/// Initialize the causemap tracing/logging system.
///
/// Reads `CAUSEMAP_LOG` for per-target log levels, e.g.
/// `CAUSEMAP_LOG=causemap_analysis=debug,causemap_cli=warn`.
///
/// Falls back to [`DEFAULT_DIRECTIVES`] when the variable is missing or invalid.
/// Output goes to stderr so stdout stays free for JSON results.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        // An embedding application may already own the global subscriber.
        if let Err(err) = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init()
        {
            tracing::debug!(error = %err, "causemap subscriber not installed; keeping existing one");
        }
    });
}
