//! Typography panel: heading and body font families of the active theme.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tinge_core::Theme;

use crate::layouts::block_for_panel;
use crate::styles::ThemeStyles;

/// Build the two font rows.
pub fn typography_lines(theme: &Theme, styles: &ThemeStyles) -> Vec<Line<'static>> {
    let t = &theme.typography;
    vec![
        Line::from(vec![
            Span::styled("Heading  ".to_string(), styles.text_muted),
            Span::styled(t.heading_font.clone(), styles.heading()),
        ]),
        Line::from(vec![
            Span::styled("Body     ".to_string(), styles.text_muted),
            Span::styled(t.body_font.clone(), styles.text),
        ]),
    ]
}

/// Render the typography panel into `area`.
pub fn render_typography(frame: &mut Frame, area: Rect, theme: &Theme, styles: &ThemeStyles) {
    let block = block_for_panel(" Typography ", styles, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(typography_lines(theme, styles)), inner);
}
