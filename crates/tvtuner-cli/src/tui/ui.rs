//! TUI rendering logic for the channel list editor.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::state::{ChannelListState, InputMode, Status};

/// Draws the channel list editor.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &ChannelListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // channel list
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);
    draw_channels(frame, chunks[1], state);
    draw_footer(frame, chunks[2], state);
}

/// Draws the tuned channel and counters.
#[allow(clippy::indexing_slicing)]
fn draw_header(frame: &mut Frame, area: Rect, state: &ChannelListState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let tuned = match (state.registry.cursor(), state.registry.current_channel()) {
        (Some(pos), Some(ch)) => format!(
            "{}. {} ({} MHz, {})",
            pos.saturating_add(1),
            ch.name(),
            ch.frequency(),
            ch.band()
        ),
        _ => String::from("not tuned"),
    };
    let tuned = Paragraph::new(tuned)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title(" Tuned "));
    frame.render_widget(tuned, header_chunks[0]);

    let count_text = format!(
        "Channels: {}  Favorites: {}",
        state.registry.count(),
        state.registry.favorites().count()
    );
    let count = Paragraph::new(count_text)
        .block(Block::default().borders(Borders::ALL).title(" Tuner "));
    frame.render_widget(count, header_chunks[1]);
}

/// Draws the numbered channel list.
fn draw_channels(frame: &mut Frame, area: Rect, state: &ChannelListState) {
    let tuned = state.registry.cursor();
    let items: Vec<ListItem> = state
        .registry
        .channels()
        .enumerate()
        .map(|(i, ch)| {
            let tuned_marker = if tuned == Some(i) { "\u{25b6}" } else { " " };
            let fav_marker = if ch.is_favorite() { "\u{2605}" } else { " " };
            let swap_marker = if state.swap_mark == Some(i) { "*" } else { " " };

            let style = if i == state.highlight {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if tuned == Some(i) {
                Style::default().fg(Color::Green)
            } else if ch.is_favorite() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!("{tuned_marker}{fav_marker}{swap_marker}")),
                Span::styled(
                    format!(
                        "{:>3}. {:<24} {:>4} MHz  {}",
                        i.saturating_add(1),
                        ch.name(),
                        ch.frequency(),
                        ch.band()
                    ),
                    style,
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Channels "),
    );

    let mut list_state = ListState::default().with_selected(Some(state.highlight));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Draws the input line, last status, or key hints.
fn draw_footer(frame: &mut Frame, area: Rect, state: &ChannelListState) {
    let (text, style, title) = match state.input_mode {
        InputMode::Search => (
            state.input.clone(),
            Style::default().fg(Color::Yellow),
            " Find by name (Enter: go, Esc: cancel) ",
        ),
        InputMode::Add => (
            state.input.clone(),
            Style::default().fg(Color::Yellow),
            " Add: <MHz> <name> (Enter: add, Esc: cancel) ",
        ),
        InputMode::Normal => match &state.status {
            Status::Idle => (
                String::from(
                    "\u{2191}\u{2193}/j/k: move  Enter: tune  f: favorite  s: mark/swap  d: remove  /: find  a: add  r: reset  q: quit",
                ),
                Style::default(),
                "",
            ),
            Status::Done(msg) => (msg.clone(), Style::default().fg(Color::Green), ""),
            Status::Refused(msg) => (msg.clone(), Style::default().fg(Color::Red), ""),
        },
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(footer, area);
}
