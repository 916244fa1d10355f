use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// State-change notifications published by the studio. The TUI (and any
/// other subscriber) re-reads its view of the world from these; the studio
/// never calls into presentation code directly. Events carry full theme
/// payloads so subscribers do not need a back-channel to the studio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudioEvent {
    GenerationStarted { prompt: String },

    ThemesGenerated { themes: Vec<Theme> },

    GenerationFailed { error: String },

    GenerationCancelled,

    ThemeSelected { theme: Theme },

    Status { message: String },
}

impl StudioEvent {
    pub fn generation_started(prompt: impl Into<String>) -> Self {
        StudioEvent::GenerationStarted {
            prompt: prompt.into(),
        }
    }

    pub fn themes_generated(themes: Vec<Theme>) -> Self {
        StudioEvent::ThemesGenerated { themes }
    }

    pub fn generation_failed(error: impl Into<String>) -> Self {
        StudioEvent::GenerationFailed {
            error: error.into(),
        }
    }

    pub fn generation_cancelled() -> Self {
        StudioEvent::GenerationCancelled
    }

    pub fn theme_selected(theme: Theme) -> Self {
        StudioEvent::ThemeSelected { theme }
    }

    pub fn status(message: impl Into<String>) -> Self {
        StudioEvent::Status {
            message: message.into(),
        }
    }
}
