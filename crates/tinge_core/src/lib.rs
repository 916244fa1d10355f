pub mod color;
pub mod command;
pub mod error;
pub mod event;
pub mod theme;

pub use color::{contrast_of, Rgb, BLACK, WHITE};
pub use command::StudioCommand;
pub use error::{CoreError, Result};
pub use event::StudioEvent;
pub use theme::{Theme, ThemeColors, Typography, DEFAULT_THEME_NAME};
