//! Theme model: a named bundle of eight semantic color slots plus two font
//! identifiers, and the constant default theme shown at startup.
//!
//! A generated batch replaces the previous one and its first theme becomes
//! active; selection swaps the active theme. Nothing here persists across
//! sessions.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{CoreError, Result};

/// Name of the theme active at process start.
pub const DEFAULT_THEME_NAME: &str = "Dark Fintech";

/// The eight semantic color slots every theme carries. Each slot is a valid
/// color by construction; malformed hex fails at deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Main background color.
    pub background: Rgb,
    /// Main text color.
    pub foreground: Rgb,
    /// Primary actions, links.
    pub primary: Rgb,
    /// Secondary UI elements.
    pub secondary: Rgb,
    /// Accent and highlights.
    pub accent: Rgb,
    /// Subtle backgrounds.
    pub muted: Rgb,
    /// Card backgrounds.
    pub card: Rgb,
    /// Border color.
    pub border: Rgb,
}

impl ThemeColors {
    /// Slots in display order with their labels and short descriptions,
    /// for palette listings.
    pub fn slots(&self) -> [(&'static str, &'static str, Rgb); 8] {
        [
            ("Background", "Main background color", self.background),
            ("Foreground", "Main text color", self.foreground),
            ("Primary", "Primary actions, links", self.primary),
            ("Secondary", "Secondary UI elements", self.secondary),
            ("Accent", "Accent and highlights", self.accent),
            ("Muted", "Subtle backgrounds", self.muted),
            ("Card", "Card backgrounds", self.card),
            ("Border", "Border color", self.border),
        ]
    }
}

/// Font identifiers: opaque family names, not validated against any registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
}

impl Typography {
    pub fn new(heading_font: impl Into<String>, body_font: impl Into<String>) -> Self {
        Self {
            heading_font: heading_font.into(),
            body_font: body_font.into(),
        }
    }
}

/// One theme: display name, color slots, typography.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub typography: Typography,
}

impl Theme {
    /// Display-level invariant: the name must be non-empty. Colors need no
    /// check here — [Rgb] is valid by construction.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyThemeName);
        }
        Ok(())
    }

    /// The default theme active at process start.
    pub fn dark_fintech() -> Self {
        Theme {
            name: DEFAULT_THEME_NAME.to_string(),
            colors: ThemeColors {
                background: Rgb(0x0f, 0x17, 0x2a),
                foreground: Rgb(0xf8, 0xfa, 0xfc),
                primary: Rgb(0x0e, 0xa5, 0xe9),
                secondary: Rgb(0x47, 0x55, 0x69),
                accent: Rgb(0x3b, 0x82, 0xf6),
                muted: Rgb(0x33, 0x41, 0x55),
                card: Rgb(0x1e, 0x29, 0x3b),
                border: Rgb(0x33, 0x41, 0x55),
            },
            typography: Typography::new("Poppins", "Inter"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_fintech()
    }
}
