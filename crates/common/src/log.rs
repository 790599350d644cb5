use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. `RUST_LOG` wins over `log_level`, which defaults to `info`.
///
/// Output goes to stderr so reports written to stdout stay machine readable.
pub fn init(log_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info"))),
        )
        .init();
}
