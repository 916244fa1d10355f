//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks
//! on terminal input; studio events and log lines are drained from their
//! channels on every iteration.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tinge_core::{StudioCommand, StudioEvent};
use tokio::sync::mpsc as tokio_mpsc;

use crate::events::apply_studio_event;
use crate::state::{Screen, StudioViewState};
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Run the TUI against a studio driver: receive [StudioEvent] on
/// `event_rx`, send [StudioCommand] on `command_tx`. If `log_rx` is
/// provided, runtime log lines (tracing) are shown on the logs screen
/// (Ctrl+D).
pub fn run_tui(
    mut event_rx: tokio_mpsc::Receiver<StudioEvent>,
    command_tx: tokio_mpsc::Sender<StudioCommand>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = StudioViewState::new();
    state.push_trace_line("[log] TUI started. Runtime logs show tracing output.".to_string());
    let result = run_loop(&mut terminal, &mut state, &mut event_rx, &command_tx, log_rx);

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut StudioViewState,
    event_rx: &mut tokio_mpsc::Receiver<StudioEvent>,
    command_tx: &tokio_mpsc::Sender<StudioCommand>,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
            {
                let _ = key_tx.send(ev);
            }
        }
    });

    loop {
        // Drain runtime log lines (multi-line logs split into separate lines)
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }

        // Drain studio events
        while let Ok(ev) = event_rx.try_recv() {
            apply_studio_event(state, ev);
        }

        // Status timeout: clear transient status after 5s
        if !state.status_permanent
            && let Some(set_at) = state.status_set_at
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.status.clear();
            state.status_set_at = None;
            state.needs_redraw = true;
        }

        if state.needs_redraw || state.is_generating {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        if let Ok(ev) = key_rx.try_recv() {
            match ev {
                Event::Key(e) => {
                    if e.kind != KeyEventKind::Press {
                        continue;
                    }
                    match e.code {
                        KeyCode::Char('d') if e.modifiers.contains(KeyModifiers::CONTROL) => {
                            state.screen = match state.screen {
                                Screen::Studio => Screen::RuntimeLogs,
                                Screen::RuntimeLogs => Screen::Studio,
                            };
                            state.needs_redraw = true;
                        }
                        KeyCode::Char('c') if e.modifiers.contains(KeyModifiers::CONTROL) => {
                            if state.is_generating {
                                let _ = command_tx.try_send(StudioCommand::cancel());
                                state.set_status("Cancelling… (Ctrl+C again to quit)");
                            } else {
                                break;
                            }
                        }
                        KeyCode::Char('q') if state.input_buffer.is_empty() => break,
                        KeyCode::Esc if state.screen == Screen::RuntimeLogs => {
                            state.screen = Screen::Studio;
                            state.needs_redraw = true;
                        }
                        KeyCode::Esc => break,
                        KeyCode::Up if state.screen == Screen::RuntimeLogs => {
                            state.trace_scroll_up(1)
                        }
                        KeyCode::Down if state.screen == Screen::RuntimeLogs => {
                            state.trace_scroll_down(1)
                        }
                        KeyCode::PageUp if state.screen == Screen::RuntimeLogs => {
                            state.trace_scroll_up(10)
                        }
                        KeyCode::PageDown if state.screen == Screen::RuntimeLogs => {
                            state.trace_scroll_down(10)
                        }
                        KeyCode::Enter if state.screen == Screen::Studio => {
                            if state.is_generating {
                                state.set_status("Still generating — hang tight");
                                continue;
                            }
                            let line = state.input_take();
                            let trimmed = line.trim();
                            if !trimmed.is_empty() {
                                let _ = command_tx.try_send(StudioCommand::submit(trimmed));
                            }
                        }
                        KeyCode::Tab if state.screen == Screen::Studio => {
                            if let Some(index) = state.candidate_next() {
                                let _ = command_tx.try_send(StudioCommand::select(index));
                            }
                        }
                        KeyCode::BackTab if state.screen == Screen::Studio => {
                            if let Some(index) = state.candidate_prev() {
                                let _ = command_tx.try_send(StudioCommand::select(index));
                            }
                        }
                        KeyCode::Up if state.screen == Screen::Studio => state.palette_cursor_up(),
                        KeyCode::Down if state.screen == Screen::Studio => {
                            state.palette_cursor_down()
                        }
                        KeyCode::Char('y') if e.modifiers.contains(KeyModifiers::CONTROL) => {
                            copy_palette_row_to_clipboard(state);
                        }
                        KeyCode::Backspace if state.screen == Screen::Studio => {
                            state.input_backspace()
                        }
                        KeyCode::Char('u') if e.modifiers.contains(KeyModifiers::CONTROL) => {
                            state.input_clear_line()
                        }
                        KeyCode::Char('k') if e.modifiers.contains(KeyModifiers::CONTROL) => {
                            state.input_kill_to_end()
                        }
                        KeyCode::Char(c) if state.screen == Screen::Studio => {
                            state.input_insert(c)
                        }
                        KeyCode::Left if state.screen == Screen::Studio => {
                            state.input_cursor_left()
                        }
                        KeyCode::Right if state.screen == Screen::Studio => {
                            state.input_cursor_right()
                        }
                        KeyCode::Home if state.screen == Screen::Studio => {
                            state.input_cursor_home()
                        }
                        KeyCode::End if state.screen == Screen::Studio => state.input_cursor_end(),
                        KeyCode::Delete if state.screen == Screen::Studio => state.input_delete(),
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    state.needs_redraw = true;
                }
                _ => {}
            }
        } else {
            std::thread::sleep(Duration::from_millis(50));
        }
    }
    Ok(())
}

/// Copy the hex of the highlighted palette row to the clipboard (Ctrl+Y).
fn copy_palette_row_to_clipboard(state: &mut StudioViewState) {
    let slots = state.active.colors.slots();
    let Some((label, _, color)) = slots.get(state.palette_cursor).copied() else {
        return;
    };
    let hex = color.to_hex();
    if cli_clipboard::set_contents(hex.clone()).is_ok() {
        state.set_status(format!("Copied {hex} ({label})"));
    }
}
