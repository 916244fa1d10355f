//! tinge_generators — generator-agnostic theme generation.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                 GeneratorRegistry                  │
//! │  ┌──────────────────────────────────────────────┐  │
//! │  │  HashMap<String, Arc<dyn ThemeGenerator>>    │  │
//! │  └──────────────────────────────────────────────┘  │
//! │                       │                            │
//! │            ┌──────────┴──────────┐                 │
//! │            ▼                     ▼                 │
//! │     ┌────────────┐        ┌──────────┐             │
//! │     │  Canned    │        │ (future  │             │
//! │     │  Generator │        │ backend) │             │
//! │     └────────────┘        └──────────┘             │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinge_generators::{CannedGenerator, GeneratorRegistry, ThemeGenerator};
//!
//! let registry = GeneratorRegistry::new().register("canned", CannedGenerator::new());
//! let generator = registry.get_generator("canned").unwrap();
//! ```

pub mod canned;
pub mod error;
pub mod generator;

#[cfg(test)]
mod tests;

pub use canned::{catalog, CannedGenerator, CANNED_GENERATOR_ID, DEFAULT_LATENCY};
pub use error::{GeneratorError, Result};
pub use generator::{GeneratorRegistry, ThemeGenerator};
