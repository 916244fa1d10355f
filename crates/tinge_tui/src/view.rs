//! Studio view: header (fixed top), candidate strip, palette/typography
//! column, live preview, and the prompt input fixed at the bottom.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::layouts::{
    block_for_input, render_header, shortcut_inner_rect, shortcut_line, studio_splits,
    HEADER_STATUS_READY, INPUT_ICON,
};
use crate::panels::{candidates, palette, preview, typography};
use crate::state::{Screen, StudioViewState};
use crate::styles::ThemeStyles;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the full TUI: studio or runtime logs depending on state.screen.
pub fn draw(frame: &mut Frame, state: &mut StudioViewState, area: Rect) {
    match state.screen {
        Screen::RuntimeLogs => draw_runtime_logs(frame, state, area),
        Screen::Studio => draw_studio(frame, state, area),
    }
}

/// Runtime logs screen: scrollable list of tracing output. Ctrl+D to close.
fn draw_runtime_logs(frame: &mut Frame, state: &mut StudioViewState, area: Rect) {
    let styles = ThemeStyles::from_theme(&state.active);
    let block = Block::default()
        .title(" Runtime logs (Ctrl+D to close) ")
        .borders(ratatui::widgets::Borders::ALL)
        .border_style(styles.border)
        .style(styles.background);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height = state.trace_lines.len();
    let viewport_height = inner.height as usize;
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(state.trace_scroll)
        .take(viewport_height)
        .map(|s| Line::from(Span::styled(s.clone(), styles.text_muted)))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Main studio view. The whole screen is chromed in the active theme, so a
/// selection is visible everywhere at once.
fn draw_studio(frame: &mut Frame, state: &mut StudioViewState, area: Rect) {
    let styles = ThemeStyles::from_theme(&state.active);
    frame.render_widget(Block::default().style(styles.background), area);

    let splits = studio_splits(area, !state.candidates.is_empty());

    // ---- Header ----
    let status = if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    let has_error = state.status.to_lowercase().contains("failed")
        || state.status.to_lowercase().contains("error");
    render_header(
        frame,
        splits.header,
        &styles,
        status,
        state.is_generating,
        has_error,
    );

    // ---- Candidate strip ----
    candidates::render_candidates(
        frame,
        splits.candidates,
        &state.candidates,
        state.candidate_cursor,
        &styles,
    );

    // ---- Panels ----
    palette::render_palette(
        frame,
        splits.palette,
        &state.active,
        state.palette_cursor,
        &styles,
    );
    typography::render_typography(frame, splits.typography, &state.active, &styles);
    if state.is_generating && state.candidates.is_empty() {
        draw_generating_placeholder(frame, splits.preview, state.frame_count, &styles);
    } else {
        preview::render_preview(frame, splits.preview, &state.active, &styles);
    }

    // ---- Footer: input block + shortcut ----
    let input_rect = Rect { height: 3.min(splits.footer.height), ..splits.footer };
    let shortcut_rect = Rect {
        y: splits.footer.y + input_rect.height,
        height: splits.footer.height.saturating_sub(input_rect.height),
        ..splits.footer
    };

    let block = block_for_input(&styles);
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let placeholder = "Describe the vibe — e.g. a sleek dark fintech dashboard…";
    let (icon_style, content_style) = if state.input_buffer.is_empty() {
        (styles.primary, styles.text_muted)
    } else {
        (styles.accent, styles.text)
    };
    let input_line = Line::from(vec![
        Span::styled(INPUT_ICON.to_string(), icon_style),
        Span::styled(
            if state.input_buffer.is_empty() {
                placeholder.to_string()
            } else {
                state.input_buffer.clone()
            },
            content_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(input_line), inner);

    // Cursor: display width (unicode-width) for position
    let icon_width = INPUT_ICON.width();
    let before_cursor = &state.input_buffer[..state.input_cursor.min(state.input_buffer.len())];
    let cursor_col = (inner.x + icon_width as u16 + before_cursor.width() as u16)
        .min(inner.x + inner.width);
    frame.set_cursor_position((cursor_col, inner.y));

    frame.render_widget(
        Paragraph::new(shortcut_line(
            &styles,
            state.is_generating,
            !state.input_buffer.is_empty(),
        )),
        shortcut_inner_rect(shortcut_rect),
    );
}

/// Shown in the preview region during the very first generation, before
/// any batch exists.
fn draw_generating_placeholder(
    frame: &mut Frame,
    area: Rect,
    frame_count: u64,
    styles: &ThemeStyles,
) {
    let spinner = SPINNER_FRAMES[(frame_count / 2) as usize % SPINNER_FRAMES.len()];
    let para = Paragraph::new(vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(format!("{spinner} "), styles.primary),
            Span::styled(
                "Generating themes based on your prompt…".to_string(),
                styles.text_muted,
            ),
        ]),
    ])
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(para, area);
}
