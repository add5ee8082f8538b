use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a stderr subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "marble_planner=debug"
    } else {
        "marble_planner=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
