use tracing_subscriber::EnvFilter;

/// Installs the stderr `tracing` subscriber used by the binaries.
///
/// Defaults to `warn`; set `RUST_LOG=pattern_demos=debug` to follow the
/// collaborators step by step.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
