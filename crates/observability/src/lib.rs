//! Tracing setup for tinge.studio.
//!
//! One process, two destinations: an optional console (stderr) layer for CLI
//! commands, and an optional line sink that feeds the TUI's log screen while
//! the TUI owns the terminal.
//!
//! # Quick Start
//!
//! ```no_run
//! use tinge_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::from_env().with_console(true);
//! init(config).expect("tracing init");
//!
//! tracing::info!("service started");
//! ```
//!
//! # Environment Variables
//!
//! - `TINGE_LOG` or `RUST_LOG` — log level filter (default "info")

pub mod config;
pub mod error;
pub mod sink_layer;
pub mod telemetry;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
