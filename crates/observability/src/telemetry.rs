//! Subscriber setup: env filter, optional console layer, optional line sink.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::sink_layer;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber from `config`. Call once at
/// startup; a second call fails with [ObservabilityError::AlreadyInitialized].
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    INITIALIZED
        .set(())
        .map_err(|_| ObservabilityError::AlreadyInitialized)?;

    let env_filter = config
        .log_level
        .as_ref()
        .map(|level| tracing_subscriber::EnvFilter::new(level.as_str()))
        .unwrap_or_else(|| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        });

    // Console logging goes to stderr so it never tangles with command output
    // (and stays off entirely while the TUI owns the terminal).
    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
    });

    let sink = sink_layer::sink_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    Ok(())
}

/// Initialize from environment variables ([ObservabilityConfig::from_env]).
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
