use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber
///
/// `default_level` applies when `debug` is off and `RUST_LOG` is unset.
/// Stdout is reserved for the panel and the hook's JSON answer.
pub fn setup_logging(debug: bool, default_level: &str) {
    let filter = if debug {
        EnvFilter::new("ctir_footer=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("ctir_footer={}", default_level)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
