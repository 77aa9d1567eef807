//! Channel list editor state.

use tvtuner_core::TunerRegistry;

use crate::script::{Command, execute, parse_command};

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode.
    Normal,
    /// Typing a name query.
    Search,
    /// Typing `<MHz> <name>` for a new channel.
    Add,
}

/// Outcome of the last action, shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Nothing to report.
    Idle,
    /// Action applied.
    Done(String),
    /// Action refused.
    Refused(String),
}

/// State for the channel list editor.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ChannelListState {
    /// Registry being edited.
    pub registry: TunerRegistry,
    /// Highlighted row (zero-based position).
    pub highlight: usize,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Text typed in `Search` or `Add` mode.
    pub input: String,
    /// Position marked as the first half of a swap.
    pub swap_mark: Option<usize>,
    /// Last action outcome.
    pub status: Status,
}

impl ChannelListState {
    /// Creates a state editing `registry`, highlighting the tuned channel if any.
    #[must_use]
    pub fn new(registry: TunerRegistry) -> Self {
        let highlight = registry.cursor().unwrap_or(0);
        Self {
            registry,
            highlight,
            input_mode: InputMode::Normal,
            input: String::new(),
            swap_mark: None,
            status: Status::Idle,
        }
    }

    /// Moves the highlight up.
    pub const fn move_up(&mut self) {
        self.highlight = self.highlight.saturating_sub(1);
    }

    /// Moves the highlight down, stopping at the last channel.
    pub fn move_down(&mut self) {
        if self.highlight.saturating_add(1) < self.registry.count() {
            self.highlight = self.highlight.saturating_add(1);
        }
    }

    /// Runs a command against the registry and records the outcome.
    fn apply(&mut self, command: &Command) -> bool {
        match execute(&mut self.registry, command) {
            Ok(report) => {
                self.status = Status::Done(report);
                true
            }
            Err(err) => {
                self.status = Status::Refused(format!("{err:#}"));
                false
            }
        }
    }

    /// Tunes to the highlighted channel.
    pub fn tune_highlighted(&mut self) {
        self.apply(&Command::Tune(self.highlight));
    }

    /// Toggles favorite on the tuned channel.
    pub fn toggle_favorite(&mut self) {
        self.apply(&Command::Favorite);
    }

    /// Removes the highlighted channel.
    pub fn remove_highlighted(&mut self) {
        if self.apply(&Command::Remove(self.highlight)) {
            self.swap_mark = None;
            self.clamp_highlight();
        }
    }

    /// Marks the highlighted channel, or swaps it with the marked one.
    pub fn mark_or_swap(&mut self) {
        match self.swap_mark.take() {
            None => {
                self.swap_mark = Some(self.highlight);
                self.status = Status::Done(format!(
                    "Marked position {} for swap",
                    self.highlight.saturating_add(1)
                ));
            }
            Some(mark) => {
                self.apply(&Command::Swap(mark, self.highlight));
            }
        }
    }

    /// Restores the factory lineup.
    pub fn reset(&mut self) {
        self.apply(&Command::Reset);
        self.highlight = 0;
        self.swap_mark = None;
    }

    /// Enters an input mode with an empty buffer.
    pub fn begin_input(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.input.clear();
    }

    /// Appends a character to the input buffer.
    pub fn input_push(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Removes the last character from the input buffer.
    pub fn input_pop(&mut self) {
        self.input.pop();
    }

    /// Leaves input mode without applying anything.
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    /// Applies the input buffer according to the current mode.
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        let mode = self.input_mode;
        self.input_mode = InputMode::Normal;

        match mode {
            InputMode::Normal => {}
            InputMode::Search => {
                if let Some(pos) = self.registry.find_by_name(&input) {
                    self.highlight = pos;
                    self.status = Status::Done(format!(
                        "'{}' found at position {}",
                        input.trim(),
                        pos.saturating_add(1)
                    ));
                } else {
                    self.status = Status::Refused(format!("no channel matches '{input}'"));
                }
            }
            InputMode::Add => match parse_command(&format!("add {input}")) {
                Ok(Some(command)) => {
                    if self.apply(&command) {
                        self.highlight = self.registry.count().saturating_sub(1);
                    }
                }
                Ok(None) => {}
                Err(err) => self.status = Status::Refused(format!("{err:#}")),
            },
        }
    }

    fn clamp_highlight(&mut self) {
        let last = self.registry.count().saturating_sub(1);
        if self.highlight > last {
            self.highlight = last;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn make_test_state() -> ChannelListState {
        ChannelListState::new(TunerRegistry::new())
    }

    fn type_text(state: &mut ChannelListState, text: &str) {
        for ch in text.chars() {
            state.input_push(ch);
        }
    }

    #[test]
    fn test_initial_state() {
        // Arrange & Act
        let state = make_test_state();

        // Assert
        assert_eq!(state.highlight, 0);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.status, Status::Idle);
        assert!(!state.registry.is_tuned());
    }

    #[test]
    fn test_initial_highlight_follows_tuned_channel() {
        // Arrange
        let mut registry = TunerRegistry::new();
        registry.tune(6);

        // Act
        let state = ChannelListState::new(registry);

        // Assert
        assert_eq!(state.highlight, 6);
    }

    #[test]
    fn test_move_down_up_bounds() {
        // Arrange
        let mut state = make_test_state();

        // Act & Assert
        state.move_up();
        assert_eq!(state.highlight, 0);
        for _ in 0..20 {
            state.move_down();
        }
        assert_eq!(state.highlight, 9);
        state.move_up();
        assert_eq!(state.highlight, 8);
    }

    #[test]
    fn test_tune_and_favorite() {
        // Arrange
        let mut state = make_test_state();
        state.move_down();
        state.move_down();

        // Act
        state.tune_highlighted();
        state.toggle_favorite();

        // Assert
        assert_eq!(state.registry.cursor(), Some(2));
        assert!(state.registry.get_channel(2).unwrap().is_favorite());
        assert!(matches!(state.status, Status::Done(_)));
    }

    #[test]
    fn test_favorite_without_tuning_is_refused() {
        // Arrange
        let mut state = make_test_state();

        // Act
        state.toggle_favorite();

        // Assert
        assert!(matches!(state.status, Status::Refused(_)));
    }

    #[test]
    fn test_remove_last_row_clamps_highlight() {
        // Arrange
        let mut state = make_test_state();
        state.highlight = 9;

        // Act
        state.remove_highlighted();

        // Assert
        assert_eq!(state.registry.count(), 9);
        assert_eq!(state.highlight, 8);
    }

    #[test]
    fn test_mark_then_swap() {
        // Arrange
        let mut state = make_test_state();

        // Act
        state.mark_or_swap();
        state.move_down();
        state.mark_or_swap();

        // Assert
        assert_eq!(state.swap_mark, None);
        assert_eq!(state.registry.get_channel(0).unwrap().name(), "CM TV HD");
        assert_eq!(state.registry.get_channel(1).unwrap().name(), "RTP 1 HD");
    }

    #[test]
    fn test_search_moves_highlight() {
        // Arrange
        let mut state = make_test_state();
        state.begin_input(InputMode::Search);
        type_text(&mut state, "globo");

        // Act
        state.submit_input();

        // Assert
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.highlight, 4);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_search_without_match_keeps_highlight() {
        // Arrange
        let mut state = make_test_state();
        state.highlight = 3;
        state.begin_input(InputMode::Search);
        type_text(&mut state, "bbc");

        // Act
        state.submit_input();

        // Assert
        assert_eq!(state.highlight, 3);
        assert!(matches!(state.status, Status::Refused(_)));
    }

    #[test]
    fn test_add_channel_from_input() {
        // Arrange
        let mut state = make_test_state();
        state.begin_input(InputMode::Add);
        type_text(&mut state, "530 Local News");

        // Act
        state.submit_input();

        // Assert
        assert_eq!(state.registry.count(), 11);
        assert_eq!(state.highlight, 10);
        assert_eq!(
            state.registry.get_channel(10).unwrap().name(),
            "Local News"
        );
    }

    #[test]
    fn test_add_invalid_frequency_is_refused() {
        // Arrange
        let mut state = make_test_state();
        state.begin_input(InputMode::Add);
        type_text(&mut state, "100 Test");

        // Act
        state.submit_input();

        // Assert
        assert_eq!(state.registry.count(), 10);
        assert!(matches!(state.status, Status::Refused(_)));
    }

    #[test]
    fn test_cancel_input() {
        // Arrange
        let mut state = make_test_state();
        state.begin_input(InputMode::Add);
        type_text(&mut state, "5");
        state.input_pop();
        state.input_push('6');

        // Act
        state.cancel_input();

        // Assert
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.input.is_empty());
        assert_eq!(state.registry.count(), 10);
    }

    #[test]
    fn test_reset() {
        // Arrange
        let mut state = make_test_state();
        state.highlight = 5;
        state.tune_highlighted();
        state.remove_highlighted();

        // Act
        state.reset();

        // Assert
        assert_eq!(state.registry.count(), 10);
        assert_eq!(state.highlight, 0);
        assert!(!state.registry.is_tuned());
    }
}
