//! Configuration for tracing setup

use std::sync::Arc;

/// Sink for formatted log lines (e.g. the TUI log screen). Called from the
/// tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Observability configuration: console logging plus an optional line sink.
#[derive(Clone, Default)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g. "info", "debug", "tinge_studio=debug").
    /// Falls back to RUST_LOG, then "info".
    pub log_level: Option<String>,

    /// Emit formatted events to stderr. Off when a TUI owns the terminal.
    pub enable_console: bool,

    /// Optional sink for each formatted log line.
    pub log_sink: Option<LogSink>,
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("log_level", &self.log_level)
            .field("enable_console", &self.enable_console)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new() -> Self {
        Self {
            log_level: None,
            enable_console: true,
            log_sink: None,
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Sink for formatted log lines (e.g. the TUI log screen). Must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment: `TINGE_LOG`, then `RUST_LOG`, for the filter.
    pub fn from_env() -> Self {
        let log_level = std::env::var("TINGE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        Self {
            log_level,
            enable_console: true,
            log_sink: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = ObservabilityConfig::new()
            .with_log_level("debug")
            .with_console(false);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(!config.enable_console);
        assert!(config.log_sink.is_none());
    }

    #[test]
    fn from_env_keeps_console_and_no_sink() {
        let config = ObservabilityConfig::from_env();
        assert!(config.enable_console);
        assert!(config.log_sink.is_none());
    }

    #[test]
    fn debug_hides_sink_closure() {
        let config =
            ObservabilityConfig::new().with_log_sink(Arc::new(|_line| {}));
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("Some(LogSink)"));
    }
}
