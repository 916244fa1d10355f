//! TUI state: active theme, candidate batch, prompt input, status line.
//!
//! [StudioViewState] holds everything the view needs to render. It mirrors
//! studio state from [tinge_core::StudioEvent]s; the only state it owns
//! outright is presentation-local (cursors, input buffer, trace lines).

use tinge_core::Theme;

/// Which screen is currently shown (studio vs runtime logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Studio,
    RuntimeLogs,
}

/// Number of rows in the palette panel (one per color slot).
pub const PALETTE_ROWS: usize = 8;

/// Max trace lines to keep (older lines dropped).
const MAX_TRACE_LINES: usize = 2000;

/// TUI application state.
#[derive(Debug)]
pub struct StudioViewState {
    /// Theme every preview surface renders right now.
    pub active: Theme,
    /// Most recent generated batch (empty before the first generation).
    pub candidates: Vec<Theme>,
    /// Highlighted candidate card (index into `candidates`).
    pub candidate_cursor: usize,
    /// True while a generation is in flight (drives the spinner).
    pub is_generating: bool,
    /// Current prompt line (footer).
    pub input_buffer: String,
    /// Cursor position within input_buffer (0..=len, byte offset).
    pub input_cursor: usize,
    /// Highlighted row in the palette panel (0..PALETTE_ROWS).
    pub palette_cursor: usize,
    /// Optional status text for header right side.
    pub status: String,
    /// When set, status is transient and should auto-clear after duration.
    pub status_set_at: Option<std::time::Instant>,
    /// Never auto-clear status (e.g. "Generating…" while in flight).
    pub status_permanent: bool,
    /// Incremented each run_loop iteration for spinner animation.
    pub frame_count: u64,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Current screen (studio or runtime logs).
    pub screen: Screen,
    /// Runtime log lines (tracing output). Newest at end.
    pub trace_lines: Vec<String>,
    /// Scroll offset for the runtime logs view (lines scrolled up).
    pub trace_scroll: usize,
}

impl Default for StudioViewState {
    fn default() -> Self {
        Self {
            active: Theme::dark_fintech(),
            candidates: Vec::new(),
            candidate_cursor: 0,
            is_generating: false,
            input_buffer: String::new(),
            input_cursor: 0,
            palette_cursor: 0,
            status: String::new(),
            status_set_at: None,
            status_permanent: false,
            frame_count: 0,
            needs_redraw: true,
            screen: Screen::Studio,
            trace_lines: Vec::new(),
            trace_scroll: 0,
        }
    }
}

impl StudioViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a transient status message (auto-clears after a few seconds).
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_set_at = Some(std::time::Instant::now());
        self.status_permanent = false;
        self.needs_redraw = true;
    }

    /// Set a status that stays until replaced (e.g. while generating).
    pub fn set_status_permanent(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_set_at = None;
        self.status_permanent = true;
        self.needs_redraw = true;
    }

    /// Input buffer: insert character at cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Input buffer: delete character before cursor (UTF-8 safe).
    pub fn input_backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_buffer.drain(start..self.input_cursor);
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Input buffer: delete character at cursor (forward delete, UTF-8 safe).
    pub fn input_delete(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_buffer.drain(self.input_cursor..end);
        self.needs_redraw = true;
    }

    /// Move cursor left one character (UTF-8 safe).
    pub fn input_cursor_left(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Move cursor right one character (UTF-8 safe).
    pub fn input_cursor_right(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_cursor = end;
        self.needs_redraw = true;
    }

    /// Cursor to start of input.
    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Cursor to end of input.
    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        self.needs_redraw = true;
    }

    /// Clear entire input buffer (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Delete from cursor to end of line (Ctrl+K).
    pub fn input_kill_to_end(&mut self) {
        self.input_buffer.truncate(self.input_cursor);
        self.needs_redraw = true;
    }

    /// Input buffer: clear and return current line (for submit).
    pub fn input_take(&mut self) -> String {
        let line = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;
        self.needs_redraw = true;
        line
    }

    /// Move the palette row highlight up (clamped at the first row).
    pub fn palette_cursor_up(&mut self) {
        self.palette_cursor = self.palette_cursor.saturating_sub(1);
        self.needs_redraw = true;
    }

    /// Move the palette row highlight down (clamped at the last row).
    pub fn palette_cursor_down(&mut self) {
        if self.palette_cursor + 1 < PALETTE_ROWS {
            self.palette_cursor += 1;
        }
        self.needs_redraw = true;
    }

    /// Advance the candidate highlight (wraps). Returns the new index to
    /// select, or None when there is no batch yet.
    pub fn candidate_next(&mut self) -> Option<usize> {
        if self.candidates.is_empty() {
            return None;
        }
        self.candidate_cursor = (self.candidate_cursor + 1) % self.candidates.len();
        self.needs_redraw = true;
        Some(self.candidate_cursor)
    }

    /// Move the candidate highlight backwards (wraps).
    pub fn candidate_prev(&mut self) -> Option<usize> {
        if self.candidates.is_empty() {
            return None;
        }
        self.candidate_cursor =
            (self.candidate_cursor + self.candidates.len() - 1) % self.candidates.len();
        self.needs_redraw = true;
        Some(self.candidate_cursor)
    }

    /// Append a line to the runtime log buffer (Ctrl+D screen). Drops oldest
    /// lines over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        self.needs_redraw = true;
    }

    /// Scroll the runtime logs view up.
    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll the runtime logs view down.
    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_theme_idle() {
        let s = StudioViewState::new();
        assert_eq!(s.active.name, "Dark Fintech");
        assert!(s.candidates.is_empty());
        assert!(!s.is_generating);
        assert_eq!(s.screen, Screen::Studio);
    }

    #[test]
    fn input_insert_ascii() {
        let mut s = StudioViewState::new();
        s.input_insert('a');
        s.input_insert('b');
        assert_eq!(s.input_buffer, "ab");
        assert_eq!(s.input_cursor, 2);
    }

    #[test]
    fn input_insert_utf8_emoji() {
        let mut s = StudioViewState::new();
        s.input_insert('é');
        s.input_insert('🎨');
        assert_eq!(s.input_buffer, "é🎨");
        assert_eq!(s.input_cursor, "é🎨".len());
    }

    #[test]
    fn input_backspace_at_end() {
        let mut s = StudioViewState::new();
        s.input_buffer = "hi".to_string();
        s.input_cursor = 2;
        s.input_backspace();
        assert_eq!(s.input_buffer, "h");
        assert_eq!(s.input_cursor, 1);
    }

    #[test]
    fn input_backspace_at_zero_no_op() {
        let mut s = StudioViewState::new();
        s.input_buffer = "x".to_string();
        s.input_cursor = 0;
        s.input_backspace();
        assert_eq!(s.input_buffer, "x");
    }

    #[test]
    fn input_take_returns_and_resets() {
        let mut s = StudioViewState::new();
        s.input_buffer = "moody jazz bar".to_string();
        s.input_cursor = 5;
        let line = s.input_take();
        assert_eq!(line, "moody jazz bar");
        assert!(s.input_buffer.is_empty());
        assert_eq!(s.input_cursor, 0);
    }

    #[test]
    fn input_cursor_multibyte() {
        let mut s = StudioViewState::new();
        s.input_insert('你');
        s.input_insert('好');
        s.input_cursor_left();
        assert_eq!(s.input_cursor, "你".len());
        s.input_cursor_left();
        assert_eq!(s.input_cursor, 0);
        s.input_cursor_right();
        assert_eq!(s.input_cursor, "你".len());
    }

    #[test]
    fn input_delete_multibyte() {
        let mut s = StudioViewState::new();
        s.input_buffer = "你好".to_string();
        s.input_cursor = 0;
        s.input_delete();
        assert_eq!(s.input_buffer, "好");
    }

    #[test]
    fn input_clear_and_kill() {
        let mut s = StudioViewState::new();
        s.input_buffer = "hello world".to_string();
        s.input_cursor = 5;
        s.input_kill_to_end();
        assert_eq!(s.input_buffer, "hello");
        s.input_clear_line();
        assert!(s.input_buffer.is_empty());
        assert_eq!(s.input_cursor, 0);
    }

    #[test]
    fn palette_cursor_clamps_at_edges() {
        let mut s = StudioViewState::new();
        s.palette_cursor_up();
        assert_eq!(s.palette_cursor, 0);
        for _ in 0..20 {
            s.palette_cursor_down();
        }
        assert_eq!(s.palette_cursor, PALETTE_ROWS - 1);
    }

    #[test]
    fn candidate_cycling_wraps() {
        let mut s = StudioViewState::new();
        s.candidates = vec![
            Theme::dark_fintech(),
            Theme::dark_fintech(),
            Theme::dark_fintech(),
        ];
        assert_eq!(s.candidate_next(), Some(1));
        assert_eq!(s.candidate_next(), Some(2));
        assert_eq!(s.candidate_next(), Some(0));
        assert_eq!(s.candidate_prev(), Some(2));
    }

    #[test]
    fn candidate_cycling_empty_batch() {
        let mut s = StudioViewState::new();
        assert_eq!(s.candidate_next(), None);
        assert_eq!(s.candidate_prev(), None);
    }

    #[test]
    fn trace_lines_capped() {
        let mut s = StudioViewState::new();
        for i in 0..2500 {
            s.push_trace_line(format!("line {}", i));
        }
        assert!(s.trace_lines.len() <= 2000);
    }

    #[test]
    fn set_status_is_transient() {
        let mut s = StudioViewState::new();
        s.set_status("Copied #0f172a");
        assert!(s.status_set_at.is_some());
        assert!(!s.status_permanent);
    }

    #[test]
    fn needs_redraw_on_input() {
        let mut s = StudioViewState::new();
        s.needs_redraw = false;
        s.input_insert('x');
        assert!(s.needs_redraw);
    }
}
