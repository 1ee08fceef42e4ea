use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so that stdout only carries prompts and the summary.
pub fn init_logging(json: bool) {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer.without_time())
            .init();
    }
}
