//! Channel list editor TUI main loop.

use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tvtuner_core::TunerRegistry;

use super::state::{ChannelListState, InputMode};
use super::ui;

/// Runs the channel list editor on `registry` and returns it once the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub fn run_channel_list(registry: TunerRegistry) -> Result<TunerRegistry> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut state = ChannelListState::new(registry);

    let result = run_event_loop(&mut terminal, &mut state);

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result?;
    Ok(state.registry)
}

/// Main event loop. Returns when the user quits.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ChannelListState,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, state))
            .context("failed to draw TUI")?;

        if event::poll(std::time::Duration::from_millis(100)).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
        {
            let quit = match state.input_mode {
                InputMode::Search | InputMode::Add => {
                    handle_text_input(state, key.code);
                    false
                }
                InputMode::Normal => handle_normal_input(state, key.code, key.modifiers),
            };
            if quit {
                return Ok(());
            }
        }
    }
}

/// Handles key input while typing a query or a new channel.
fn handle_text_input(state: &mut ChannelListState, key: KeyCode) {
    match key {
        KeyCode::Esc => state.cancel_input(),
        KeyCode::Enter => state.submit_input(),
        KeyCode::Backspace => state.input_pop(),
        KeyCode::Char(c) => state.input_push(c),
        _ => {}
    }
}

/// Handles key input in normal mode. Returns `true` to quit.
fn handle_normal_input(
    state: &mut ChannelListState,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Enter => state.tune_highlighted(),
        KeyCode::Char('f') => state.toggle_favorite(),
        KeyCode::Char('s') => state.mark_or_swap(),
        KeyCode::Char('d') | KeyCode::Delete => state.remove_highlighted(),
        KeyCode::Char('r') => state.reset(),
        KeyCode::Char('/') => state.begin_input(InputMode::Search),
        KeyCode::Char('a') => state.begin_input(InputMode::Add),
        _ => {}
    }
    false
}
