// 📝 Logging - tracing subscriber driven by the -v count
// RUST_LOG overrides the flag when set

use tracing_subscriber::EnvFilter;

/// Map a verbosity count to a level: none warn, -v info, -vv debug, -vvv trace.
pub fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing for the `ordo` target. Logs go to stderr so the
/// progress lines on stdout stay readable.
pub fn init(verbosity: u8) {
    let default_filter = format!("ordo={}", level(verbosity));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
