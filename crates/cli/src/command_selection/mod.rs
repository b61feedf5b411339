//! Interactive option selection and user input handling.
//!
//! This module provides the terminal-based user interface for seedhe-cmd:
//! the scrollable pick-one list used for the main menu and the cheatsheets,
//! and the free-text prompt used in chat mode.
//!
//! # User Interface
//!
//! The selection list supports:
//! - Arrow keys or vim-style (j/k) navigation, and the mouse wheel
//! - Enter or a left click to select an option
//! - '/' to filter options (fuzzy search), Escape to stop filtering
//! - 'q' or Escape to back out
//! - Ctrl-C or Ctrl-D to close the input and end the session

// Export public items from submodules
pub mod colors;
pub mod input;
pub mod types;
pub mod ui;

use seedhe_cmd_core::error::Result;

// Re-exports for convenience
pub use input::prompt_line;
pub use types::{MenuChoice, SelectionEvent};
pub use ui::prompt_for_selection;

/// Asks the user to choose between options or to type text.
pub trait Prompter {
    /// Shows `options` in order and returns the index of the one picked, or
    /// `None` if nothing was picked (empty list or the user backed out).
    ///
    /// # Errors
    ///
    /// Returns [`seedhe_cmd_core::error::Error::InputClosed`] when the input
    /// is closed.
    fn select(&mut self, title: &str, options: &[String]) -> Result<Option<usize>>;

    /// Reads one line of free text.
    ///
    /// # Errors
    ///
    /// Returns [`seedhe_cmd_core::error::Error::InputClosed`] at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, title: &str, options: &[String]) -> Result<Option<usize>> {
        (**self).select(title, options)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }
}

/// Prompter drawing on the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, title: &str, options: &[String]) -> Result<Option<usize>> {
        prompt_for_selection(title, options)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        prompt_line(prompt)
    }
}
