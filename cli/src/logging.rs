use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins when set (e.g. `RUST_LOG=numerology_core=trace`);
/// otherwise `fallback_level` from the config file is used. Stdout is left to
/// the report itself so `--format json` output stays parseable.
pub fn init(fallback_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Verbose subscriber routed through the test harness's capture.
#[cfg(test)]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
