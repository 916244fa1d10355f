//! Map the active [Theme] to ratatui styles.
//!
//! The TUI has no palette of its own: all chrome (borders, backgrounds,
//! text) is derived from the active theme's color slots, so the whole
//! terminal restyles live when the theme changes. Swatch text colors come
//! from [Rgb::contrast] so hex labels stay readable on any slot color.

use ratatui::style::{Color, Modifier, Style};
use tinge_core::{Rgb, Theme};

/// Fixed semantic colors for states the theme does not model.
pub const STATUS_OK: Rgb = Rgb(34, 197, 94);
pub const STATUS_BUSY: Rgb = Rgb(234, 179, 8);
pub const STATUS_ERROR: Rgb = Rgb(239, 68, 68);

/// Convert a theme [Rgb] to a ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Ratatui styles derived from one theme. Rebuilt on every draw; deriving
/// is a handful of copies, so nothing is cached.
#[derive(Debug, Clone)]
pub struct ThemeStyles {
    /// App background fill.
    pub background: Style,
    /// Card / panel fill.
    pub surface: Style,
    /// Primary text.
    pub text: Style,
    /// Secondary / hint text.
    pub text_muted: Style,
    /// Panel borders.
    pub border: Style,
    /// Border of the highlighted panel or card.
    pub border_focused: Style,
    /// Accent foreground (badges, deltas, highlights).
    pub accent: Style,
    /// Primary-action foreground.
    pub primary: Style,
}

impl ThemeStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        let c = &theme.colors;
        Self {
            background: Style::default().bg(rgb_to_color(c.background)),
            surface: Style::default()
                .bg(rgb_to_color(c.card))
                .fg(rgb_to_color(c.foreground)),
            text: Style::default().fg(rgb_to_color(c.foreground)),
            text_muted: Style::default().fg(rgb_to_color(c.secondary)),
            border: Style::default().fg(rgb_to_color(c.border)),
            border_focused: Style::default().fg(rgb_to_color(c.primary)),
            accent: Style::default().fg(rgb_to_color(c.accent)),
            primary: Style::default().fg(rgb_to_color(c.primary)),
        }
    }

    /// Bold variant of the primary text style (headings).
    pub fn heading(&self) -> Style {
        self.text.add_modifier(Modifier::BOLD)
    }
}

/// Style for a color swatch: the slot color as background, its contrast
/// color as foreground.
pub fn swatch_style(color: Rgb) -> Style {
    Style::default()
        .bg(rgb_to_color(color))
        .fg(rgb_to_color(color.contrast()))
}

/// Style for a filled UI element (button, badge) in the preview.
pub fn filled_style(color: Rgb) -> Style {
    swatch_style(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_follow_theme_slots() {
        let theme = Theme::dark_fintech();
        let styles = ThemeStyles::from_theme(&theme);
        assert_eq!(styles.background.bg, Some(Color::Rgb(0x0f, 0x17, 0x2a)));
        assert_eq!(styles.text.fg, Some(Color::Rgb(0xf8, 0xfa, 0xfc)));
        assert_eq!(styles.border_focused.fg, Some(Color::Rgb(0x0e, 0xa5, 0xe9)));
    }

    #[test]
    fn swatch_foreground_is_readable() {
        // A near-white slot gets black text, a near-black slot gets white.
        let light = swatch_style(Rgb(0xf8, 0xfa, 0xfc));
        assert_eq!(light.fg, Some(Color::Rgb(0, 0, 0)));
        let dark = swatch_style(Rgb(0x0f, 0x17, 0x2a));
        assert_eq!(dark.fg, Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn heading_is_bold_text() {
        let styles = ThemeStyles::from_theme(&Theme::dark_fintech());
        assert!(styles.heading().add_modifier.contains(Modifier::BOLD));
    }
}
