//! Test logging setup.
//!
//! Call `init_test_logging()` at the start of any test whose output should
//! include tracing events:
//!
//! ```ignore
//! #[test]
//! fn test_with_logging() {
//!     hev_common::testing::init_test_logging();
//!     tracing::info!(port = 1080, "listening");
//! }
//! ```

use std::sync::Once;
use tracing_subscriber::prelude::*;

static TEST_LOGGING_INIT: Once = Once::new();

/// Environment variable selecting the log level for tests.
pub const TEST_LOG_LEVEL_VAR: &str = "HEV_TEST_LOG_LEVEL";

/// Install a compact subscriber bound to the libtest output capture.
///
/// The level comes from `HEV_TEST_LOG_LEVEL` (default `info`). Safe to call
/// multiple times; only the first call installs anything, and an already
/// installed global subscriber is left in place.
pub fn init_test_logging() {
    TEST_LOGGING_INIT.call_once(|| {
        let level = std::env::var(TEST_LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());
        let filter = tracing_subscriber::EnvFilter::try_new(format!("hev_common={level}"))
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_level(true)
            .compact();

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer);

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_test_logging();
        init_test_logging();
        tracing::info!(target: "hev_common", "test logging initialized");
    }
}
