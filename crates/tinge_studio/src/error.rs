//! Studio error types

use thiserror::Error;

use tinge_generators::GeneratorError;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("a generation is already in flight")]
    Busy,

    #[error("generator returned an empty batch")]
    EmptyBatch,

    #[error("no candidate at index {index} (batch has {len})")]
    NoSuchCandidate { index: usize, len: usize },

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

pub type Result<T> = std::result::Result<T, StudioError>;
