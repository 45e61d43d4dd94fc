//! Logging initialization

/// Initialize logging based on debug flag
///
/// Diagnostics go to stderr so command output on stdout stays clean for
/// piping. Without the debug flag or a RUST_LOG setting, logging stays
/// off entirely.
pub fn init_logging(debug: bool) {
    let env_filter_set = std::env::var("RUST_LOG").is_ok();
    if !debug && !env_filter_set {
        // No logging by default (silent operation)
        return;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("weftcss=debug")),
        )
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}
