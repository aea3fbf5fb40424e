use tracing_subscriber::EnvFilter;

use crate::config::{self, EngineSettings};

/// Install the global fmt subscriber. `RUST_LOG` wins over the default filter.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    init_with_filter(config::default_log_filter());
}

/// Same as [`init_tracing`], with the fallback filter taken from settings.
pub fn init_tracing_with(settings: &EngineSettings) {
    init_with_filter(&settings.log_filter);
}

fn init_with_filter(fallback: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .try_init();

    if result.is_ok() {
        tracing::info!("{} v{} tracing initialised", config::APP_NAME, config::APP_VERSION);
    }
}
