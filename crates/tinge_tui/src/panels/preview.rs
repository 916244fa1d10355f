//! Live preview: a mock finance dashboard rendered entirely in the active
//! theme's colors, so every generation restyles it in place.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tinge_core::Theme;

use crate::styles::{filled_style, ThemeStyles};

/// Build the dashboard lines for the given theme.
pub fn preview_lines(theme: &Theme, styles: &ThemeStyles) -> Vec<Line<'static>> {
    let c = &theme.colors;
    let stat = |label: &str, value: &str, delta: &str| {
        Line::from(vec![
            Span::styled(format!(" {label:<10}"), styles.surface),
            Span::styled(format!("{value:>12}  "), styles.surface),
            Span::styled(format!("{delta:>6} "), filled_style(c.card).patch(styles.accent)),
        ])
    };
    vec![
        Line::from(Span::styled("Finance Dashboard".to_string(), styles.heading())),
        Line::from(vec![
            Span::styled("Welcome back, Alex  ".to_string(), styles.text_muted),
            Span::styled(" Premium ".to_string(), filled_style(c.accent)),
        ]),
        Line::raw(""),
        stat("Balance", "$24,580.32", "+2.4%"),
        stat("Income", "$8,240.00", "+1.2%"),
        stat("Expenses", "$3,180.45", "-0.8%"),
        Line::raw(""),
        Line::from(Span::styled("Weekly activity".to_string(), styles.text_muted)),
        Line::from(vec![
            Span::styled("▃▅▂▇▄▆█".to_string(), styles.primary),
            Span::raw(" "),
            Span::styled("▄▂▅▃▆▄▇".to_string(), styles.accent),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Transfer ".to_string(), filled_style(c.primary)),
            Span::raw("  "),
            Span::styled(" Reports ".to_string(), filled_style(c.secondary)),
        ]),
    ]
}

/// Render the preview panel into `area`, filled with the theme background.
pub fn render_preview(frame: &mut Frame, area: Rect, theme: &Theme, styles: &ThemeStyles) {
    let title = format!(" Preview — {} ", theme.name);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles.border)
        .style(styles.background);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let padded = Rect {
        x: inner.x.saturating_add(1),
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(preview_lines(theme, styles)), padded);
}
