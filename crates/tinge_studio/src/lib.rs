pub mod config;
pub mod error;
pub mod studio;

pub use config::{StudioConfig, DEFAULT_PROMPT};
pub use error::{Result, StudioError};
pub use studio::{GenerationTicket, Studio};
