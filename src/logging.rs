//! tracing subscriber setup for binaries and tests embedding the client.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Returns false when a global subscriber is already set.
pub fn init() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .try_init()
        .is_ok()
}

/// Like [`init`] but writes through the test harness capture.
pub fn init_for_tests() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        init();
        assert!(!init());
    }
}
