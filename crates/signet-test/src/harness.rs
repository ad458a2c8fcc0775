//! Logging for tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route `tracing` output through the libtest writer.
///
/// `SIGNET_TEST_LOG` overrides `default_filter`. Only the first call in a
/// test binary has an effect.
pub fn setup_test_logging(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SIGNET_TEST_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .compact()
            .try_init();
    });
}
