//! Tracing initialization and subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber with a stderr fmt layer.
///
/// The filter directive comes from `config.trace_level` when set, falling
/// back to `"info"`. Events go to stderr so the rendered catalog on stdout
/// stays clean and pipeable.
///
/// Idempotent: only the first call installs a subscriber; later calls are
/// silently ignored, which keeps tests that share a process safe.
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or("info");

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        );

    let _ = subscriber.try_init();
}
