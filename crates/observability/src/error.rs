//! Error types for observability crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    #[error("Observability already initialized")]
    AlreadyInitialized,
}
