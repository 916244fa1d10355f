//! Map [tinge_core::StudioEvent] to [StudioViewState] updates.

use tinge_core::StudioEvent;

use crate::state::StudioViewState;

/// Apply a studio event to TUI state. The studio is the single writer of
/// theme state; the view only mirrors what the events carry.
pub fn apply_studio_event(state: &mut StudioViewState, event: StudioEvent) {
    state.needs_redraw = true;
    match event {
        StudioEvent::GenerationStarted { .. } => {
            state.is_generating = true;
            state.set_status_permanent("Generating…");
        }
        StudioEvent::ThemesGenerated { themes } => {
            state.is_generating = false;
            let count = themes.len();
            if let Some(first) = themes.first() {
                state.active = first.clone();
            }
            state.candidates = themes;
            state.candidate_cursor = 0;
            let at = chrono::Local::now().format("%H:%M");
            state.set_status(format!("{count} themes generated · {at}"));
        }
        StudioEvent::GenerationFailed { error } => {
            state.is_generating = false;
            state.set_status(format!("Generation failed: {error}"));
        }
        StudioEvent::GenerationCancelled => {
            state.is_generating = false;
            state.set_status("Generation cancelled");
        }
        StudioEvent::ThemeSelected { theme } => {
            state.set_status(format!("Active: {}", theme.name));
            state.active = theme;
        }
        StudioEvent::Status { message } => {
            state.set_status(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinge_core::Theme;

    fn two_themes() -> Vec<Theme> {
        let mut second = Theme::dark_fintech();
        second.name = "Second".to_string();
        vec![Theme::dark_fintech(), second]
    }

    #[test]
    fn generation_started_raises_flag() {
        let mut s = StudioViewState::new();
        apply_studio_event(&mut s, StudioEvent::generation_started("prompt"));
        assert!(s.is_generating);
        assert!(s.status_permanent);
        assert!(s.status.contains("Generating"));
    }

    #[test]
    fn themes_generated_activates_first() {
        let mut s = StudioViewState::new();
        s.is_generating = true;
        s.candidate_cursor = 1;
        apply_studio_event(&mut s, StudioEvent::themes_generated(two_themes()));
        assert!(!s.is_generating);
        assert_eq!(s.candidates.len(), 2);
        assert_eq!(s.active.name, "Dark Fintech");
        assert_eq!(s.candidate_cursor, 0);
        assert!(s.status.contains("2 themes generated"));
    }

    #[test]
    fn failure_clears_flag_and_keeps_theme() {
        let mut s = StudioViewState::new();
        s.is_generating = true;
        apply_studio_event(
            &mut s,
            StudioEvent::generation_failed("backend unreachable"),
        );
        assert!(!s.is_generating);
        assert_eq!(s.active.name, "Dark Fintech");
        assert!(s.status.contains("backend unreachable"));
    }

    #[test]
    fn cancellation_clears_flag() {
        let mut s = StudioViewState::new();
        s.is_generating = true;
        apply_studio_event(&mut s, StudioEvent::generation_cancelled());
        assert!(!s.is_generating);
        assert!(s.status.contains("cancelled"));
    }

    #[test]
    fn selection_swaps_active() {
        let mut s = StudioViewState::new();
        let mut picked = Theme::dark_fintech();
        picked.name = "Deep Ocean".to_string();
        apply_studio_event(&mut s, StudioEvent::theme_selected(picked));
        assert_eq!(s.active.name, "Deep Ocean");
        assert!(s.status.contains("Deep Ocean"));
    }

    #[test]
    fn status_event_sets_status() {
        let mut s = StudioViewState::new();
        apply_studio_event(&mut s, StudioEvent::status("hello"));
        assert_eq!(s.status, "hello");
    }
}
