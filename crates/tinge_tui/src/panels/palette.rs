//! Palette panel: one row per color slot, hex label drawn on a swatch of
//! the slot color with the contrast foreground.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tinge_core::Theme;

use crate::layouts::block_for_panel;
use crate::styles::{swatch_style, ThemeStyles};

/// Widest slot label ("Background") plus one space.
const LABEL_WIDTH: usize = 11;

/// Build the eight slot rows. `cursor` marks the highlighted row.
pub fn palette_lines(
    theme: &Theme,
    cursor: usize,
    styles: &ThemeStyles,
    width: u16,
) -> Vec<Line<'static>> {
    theme
        .colors
        .slots()
        .iter()
        .enumerate()
        .map(|(i, (label, description, color))| {
            let marker = if i == cursor { "▸ " } else { "  " };
            let swatch = format!(" {} ", color.to_hex());
            let used = 2 + LABEL_WIDTH + swatch.len() + 1;
            let remaining = (width as usize).saturating_sub(used);
            let hint: String = description.chars().take(remaining).collect();
            Line::from(vec![
                Span::styled(marker.to_string(), styles.primary),
                Span::styled(format!("{label:<LABEL_WIDTH$}"), styles.text),
                Span::styled(swatch, swatch_style(*color)),
                Span::raw(" "),
                Span::styled(hint, styles.text_muted),
            ])
        })
        .collect()
}

/// Render the palette panel into `area`.
pub fn render_palette(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    cursor: usize,
    styles: &ThemeStyles,
) {
    let block = block_for_panel(" Palette ", styles, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = palette_lines(theme, cursor, styles, inner.width);
    frame.render_widget(Paragraph::new(lines), inner);
}
