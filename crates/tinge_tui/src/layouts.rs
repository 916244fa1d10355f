//! Screen regions and chrome for the studio view.
//!
//! Fixed header and footer strips, and a body split into the candidate
//! strip, the palette/typography column, and the live preview. All styling
//! comes from [ThemeStyles], so the chrome follows the active theme.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use ratatui::Frame;

use crate::styles::{rgb_to_color, ThemeStyles, STATUS_BUSY, STATUS_ERROR, STATUS_OK};

/// Fixed height for the header (title line + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer: input block (3) + shortcut line.
pub const FOOTER_HEIGHT: u16 = 4;

/// Height of the candidate card strip (cards with borders).
pub const CANDIDATE_STRIP_HEIGHT: u16 = 4;

/// Height of the palette panel: 8 slot rows + borders.
pub const PALETTE_PANEL_HEIGHT: u16 = 10;

/// Width of the left column (palette + typography).
pub const LEFT_COLUMN_WIDTH: u16 = 38;

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Icon shown at the start of the prompt line.
pub const INPUT_ICON: &str = "▸ ";

/// Horizontal padding inside the input block (each side).
pub const INPUT_PADDING_H: u16 = 2;

/// Title shown in the header.
pub const HEADER_TITLE: &str = "tinge.studio";

/// Status shown when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Regions of the studio screen.
#[derive(Debug, Clone)]
pub struct StudioSplits {
    /// Top strip: title + status.
    pub header: Rect,
    /// Candidate cards. Zero height before the first generation.
    pub candidates: Rect,
    /// Palette panel (left column, top).
    pub palette: Rect,
    /// Typography panel (left column, below the palette).
    pub typography: Rect,
    /// Live preview (right column, full body height).
    pub preview: Rect,
    /// Bottom strip: prompt input + shortcut hints.
    pub footer: Rect,
}

/// Split the terminal area into studio regions. When `has_candidates` is
/// false the candidate strip collapses and the panels gain its height.
/// Degrades on small terminals: regions clamp to zero height rather than
/// overlap.
pub fn studio_splits(area: Rect, has_candidates: bool) -> StudioSplits {
    let header = Rect { height: HEADER_HEIGHT.min(area.height), ..area };
    let footer_h = FOOTER_HEIGHT.min(area.height.saturating_sub(header.height));
    let footer = Rect {
        y: area.y + area.height - footer_h,
        height: footer_h,
        ..area
    };
    let body = Rect {
        y: area.y + header.height,
        height: area.height.saturating_sub(header.height + footer_h),
        ..area
    };

    let strip_h = if has_candidates && body.height > CANDIDATE_STRIP_HEIGHT {
        CANDIDATE_STRIP_HEIGHT
    } else {
        0
    };
    let candidates = Rect { height: strip_h, ..body };
    let panels = Rect {
        y: body.y + strip_h,
        height: body.height.saturating_sub(strip_h),
        ..body
    };

    let left_w = LEFT_COLUMN_WIDTH.min(panels.width / 2 + panels.width / 4);
    let palette = Rect {
        width: left_w,
        height: PALETTE_PANEL_HEIGHT.min(panels.height),
        ..panels
    };
    let typography = Rect {
        y: panels.y + palette.height,
        width: left_w,
        height: panels.height.saturating_sub(palette.height),
        ..panels
    };
    let preview = Rect {
        x: panels.x + left_w,
        width: panels.width.saturating_sub(left_w),
        ..panels
    };

    StudioSplits {
        header,
        candidates,
        palette,
        typography,
        preview,
        footer,
    }
}

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(HORIZONTAL_PADDING),
        y: area.y,
        width: area.width.saturating_sub(HORIZONTAL_PADDING * 2),
        height: area.height,
    }
}

/// Build the header line: title (bold) left, right-aligned status with a
/// colored dot. Generating: amber dot; error: red dot; else green.
pub fn header_line(
    title: &str,
    right: &str,
    is_generating: bool,
    has_error: bool,
    styles: &ThemeStyles,
    width: u16,
) -> Line<'static> {
    let title_style = styles.text.add_modifier(Modifier::BOLD);
    let dot = if has_error {
        STATUS_ERROR
    } else if is_generating {
        STATUS_BUSY
    } else {
        STATUS_OK
    };
    let dot_style = ratatui::style::Style::default().fg(rgb_to_color(dot));
    let left_len = title.len() + 1;
    let right_len = 2 + right.len(); // "● " + status
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(right.to_string(), styles.text_muted),
    ])
}

/// Draw the header: title line over a bottom border, status with colored dot.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    styles: &ThemeStyles,
    status: &str,
    is_generating: bool,
    has_error: bool,
) {
    let inner = horizontal_padding(area);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles.border)
        .style(styles.background);
    let line = header_line(
        HEADER_TITLE,
        status,
        is_generating,
        has_error,
        styles,
        inner.width,
    );
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(styles.background), inner);
}

/// Block for a bordered panel; focused panels use the primary color.
pub fn block_for_panel(
    title: &'static str,
    styles: &ThemeStyles,
    focused: bool,
) -> Block<'static> {
    let border = if focused {
        styles.border_focused
    } else {
        styles.border
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
        .style(styles.background)
}

/// Block for the prompt input: rounded full border with inner padding.
pub fn block_for_input(styles: &ThemeStyles) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.border_focused)
        .style(styles.background)
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}

/// Horizontal inset so the shortcut line aligns with input content above.
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the shortcut line, aligned with the input content.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let w = area.width.saturating_sub(SHORTCUT_INSET_H * 2);
    Rect {
        x: area.x.saturating_add(SHORTCUT_INSET_H),
        y: area.y,
        width: w,
        height: area.height,
    }
}

/// Build the shortcut hint line. Dynamic based on state:
/// - Generating: cancel hint.
/// - Input has text: send/clear hints.
/// - Otherwise: navigation, copy, logs, quit.
pub fn shortcut_line(
    styles: &ThemeStyles,
    is_generating: bool,
    input_has_text: bool,
) -> Line<'static> {
    let hint = if is_generating {
        "Generating…  ·  Ctrl+C: cancel (again to quit)"
    } else if input_has_text {
        "Enter: generate  ·  Ctrl+U: clear  ·  Ctrl+C: quit"
    } else {
        "Tab: next theme  ·  ↑↓: palette row  ·  Ctrl+Y: copy hex  ·  Ctrl+D: logs  ·  q: quit"
    };
    Line::from(vec![Span::styled(hint.to_string(), styles.text_muted)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinge_core::Theme;

    fn styles() -> ThemeStyles {
        ThemeStyles::from_theme(&Theme::dark_fintech())
    }

    #[test]
    fn splits_assign_regions() {
        let s = studio_splits(Rect::new(0, 0, 100, 30), true);
        assert_eq!(s.header.height, HEADER_HEIGHT);
        assert_eq!(s.footer.height, FOOTER_HEIGHT);
        assert_eq!(s.candidates.height, CANDIDATE_STRIP_HEIGHT);
        assert_eq!(s.palette.height, PALETTE_PANEL_HEIGHT);
        assert_eq!(s.palette.y, s.candidates.y + CANDIDATE_STRIP_HEIGHT);
        assert_eq!(s.preview.x, s.palette.x + s.palette.width);
        assert_eq!(s.footer.y, 26);
    }

    #[test]
    fn splits_without_candidates_collapse_strip() {
        let s = studio_splits(Rect::new(0, 0, 100, 30), false);
        assert_eq!(s.candidates.height, 0);
        assert_eq!(s.palette.y, s.header.height);
    }

    #[test]
    fn splits_tiny_terminal_never_overlap() {
        let s = studio_splits(Rect::new(0, 0, 40, 5), true);
        assert_eq!(s.candidates.height, 0);
        assert!(s.header.height + s.footer.height <= 5);
    }

    #[test]
    fn typography_sits_below_palette() {
        let s = studio_splits(Rect::new(0, 0, 100, 30), true);
        assert_eq!(s.typography.y, s.palette.y + s.palette.height);
        assert_eq!(s.typography.width, s.palette.width);
    }

    #[test]
    fn header_line_has_dot_and_status() {
        let line = header_line("tinge.studio", "Ready", false, false, &styles(), 60);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("tinge.studio"));
        assert!(text.ends_with("● Ready"));
    }

    #[test]
    fn shortcut_line_generating() {
        let line = shortcut_line(&styles(), true, false);
        assert!(line.spans.iter().any(|s| s.content.contains("cancel")));
    }

    #[test]
    fn shortcut_line_typing() {
        let line = shortcut_line(&styles(), false, true);
        assert!(line.spans.iter().any(|s| s.content.contains("Enter: generate")));
    }

    #[test]
    fn shortcut_line_idle() {
        let line = shortcut_line(&styles(), false, false);
        assert!(line.spans.iter().any(|s| s.content.contains("copy hex")));
    }

    #[test]
    fn shortcut_inner_rect_zero_width() {
        let inner = shortcut_inner_rect(Rect::new(0, 0, 0, 1));
        assert_eq!(inner.width, 0);
    }
}
