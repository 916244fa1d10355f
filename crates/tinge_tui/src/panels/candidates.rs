//! Candidate strip: one bordered card per generated theme, with a mini
//! swatch row. The highlighted card gets the focused border.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tinge_core::Theme;

use crate::styles::{swatch_style, ThemeStyles};

/// Mini swatch row for a card: key slots of the theme as colored cells.
pub fn card_swatch_line(theme: &Theme) -> Line<'static> {
    let c = &theme.colors;
    [c.background, c.primary, c.secondary, c.accent, c.card]
        .iter()
        .map(|color| Span::styled("  ".to_string(), swatch_style(*color)))
        .collect::<Vec<_>>()
        .into()
}

/// Render the candidate strip: cards share the width evenly.
pub fn render_candidates(
    frame: &mut Frame,
    area: Rect,
    candidates: &[Theme],
    cursor: usize,
    styles: &ThemeStyles,
) {
    if candidates.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }
    let card_w = area.width / candidates.len() as u16;
    for (i, theme) in candidates.iter().enumerate() {
        let card = Rect {
            x: area.x + card_w * i as u16,
            y: area.y,
            width: card_w,
            height: area.height,
        };
        let border = if i == cursor {
            styles.border_focused
        } else {
            styles.border
        };
        let title = format!(" {} ", truncate(&theme.name, card_w.saturating_sub(4) as usize));
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border)
            .style(styles.background);
        let inner = block.inner(card);
        frame.render_widget(block, card);
        let fonts = format!(
            "{} · {}",
            theme.typography.heading_font, theme.typography.body_font
        );
        let lines = vec![
            card_swatch_line(theme),
            Line::from(Span::styled(
                truncate(&fonts, inner.width as usize),
                styles.text_muted,
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn swatch_line_has_five_cells() {
        let line = card_swatch_line(&Theme::dark_fintech());
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[0].style.bg, Some(Color::Rgb(0x0f, 0x17, 0x2a)));
        assert_eq!(line.spans[1].style.bg, Some(Color::Rgb(0x0e, 0xa5, 0xe9)));
    }

    #[test]
    fn truncate_leaves_short_names_alone() {
        assert_eq!(truncate("Deep Ocean", 20), "Deep Ocean");
        assert_eq!(truncate("Corporate Night", 8), "Corpora…");
    }
}
