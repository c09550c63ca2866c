// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `FIELDORDER_LOG=debug`.
pub const LOG_ENV: &str = "FIELDORDER_LOG";

///
/// Installs a stderr `fmt` subscriber filtered by [`LOG_ENV`]. Without the
/// variable only warnings and errors are shown. Calling this twice is
/// harmless; the first subscriber stays.
///
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
