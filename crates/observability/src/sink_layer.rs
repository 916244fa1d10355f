//! Tracing layer that forwards each event as one formatted line to a sink.
//!
//! The TUI owns the terminal while running, so console logging is off there;
//! this layer keeps runtime logs visible on the TUI's log screen instead.

use std::fmt::Write;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Longest line forwarded to the sink; longer events are cut with a marker.
const MAX_LINE_LEN: usize = 4000;

/// Collects the event's `message` and remaining fields separately so the
/// final line always reads "message field=value …".
#[derive(Default)]
struct EventLine {
    message: String,
    fields: String,
}

impl Visit for EventLine {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            if !self.fields.is_empty() {
                self.fields.push(' ');
            }
            write!(self.fields, "{}={}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            if !self.fields.is_empty() {
                self.fields.push(' ');
            }
            write!(self.fields, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// Layer that sends each formatted event to `sink` when present.
pub(crate) fn sink_layer(sink: Option<LogSink>) -> SinkLayer {
    SinkLayer { sink }
}

#[derive(Clone)]
pub(crate) struct SinkLayer {
    sink: Option<LogSink>,
}

impl SinkLayer {
    fn format_event(event: &tracing::Event<'_>) -> String {
        let meta = event.metadata();
        let mut visitor = EventLine::default();
        event.record(&mut visitor);

        let mut line = format!("[{}] {}", meta.level(), meta.target());
        if !visitor.message.is_empty() {
            write!(line, ": {}", visitor.message).ok();
        }
        if !visitor.fields.is_empty() {
            write!(line, " {}", visitor.fields).ok();
        }
        if line.len() > MAX_LINE_LEN {
            let cut: String = line.chars().take(MAX_LINE_LEN).collect();
            line = format!("{}… ({} chars)", cut, line.len());
        }
        line
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if let Some(ref sink) = self.sink {
            sink(Self::format_event(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;

    fn capture_lines(f: impl FnOnce()) -> Vec<String> {
        let lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        let sink: LogSink = Arc::new(move |line| captured.lock().unwrap().push(line));
        let subscriber =
            tracing_subscriber::registry().with(sink_layer(Some(sink)));
        tracing::subscriber::with_default(subscriber, f);
        Arc::try_unwrap(lines).unwrap().into_inner().unwrap()
    }

    #[test]
    fn formats_level_target_and_message() {
        let lines = capture_lines(|| {
            tracing::info!(target: "tinge_studio", "themes generated");
        });
        assert_eq!(lines, vec!["[INFO] tinge_studio: themes generated"]);
    }

    #[test]
    fn appends_fields_after_message() {
        let lines = capture_lines(|| {
            tracing::warn!(target: "tinge_studio", count = 3, "stale result");
        });
        assert_eq!(lines, vec!["[WARN] tinge_studio: stale result count=3"]);
    }

    #[test]
    fn truncates_very_long_lines() {
        let lines = capture_lines(|| {
            let big = "x".repeat(MAX_LINE_LEN * 2);
            tracing::info!(target: "t", "{}", big);
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("chars)"));
        assert!(lines[0].chars().count() < MAX_LINE_LEN + 40);
    }
}
