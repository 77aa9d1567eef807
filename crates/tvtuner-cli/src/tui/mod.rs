//! TUI module for the interactive channel list editor.
//!
//! Uses `ratatui` + `crossterm` for rendering.

mod channel_list;
/// Channel list editor state types.
pub mod state;
mod ui;

pub use channel_list::run_channel_list;
