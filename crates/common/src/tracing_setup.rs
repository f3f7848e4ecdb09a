use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{ObserverError, ObserverResult};

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_tracing_with_level(level: &str) -> ObserverResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| ObserverError::Tracing(e.to_string()))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObserverError::Tracing(e.to_string()))?;

    info!("Tracing initialized with level: {}", level);

    Ok(())
}
