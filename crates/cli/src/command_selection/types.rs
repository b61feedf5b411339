//! Type definitions for option selection and UI state.
//!
//! This module defines the types shared by the selection list and the session
//! loop: main menu entries, what a key press resolves to, and the state of the
//! scrolling list.

use std::fmt::{Display, Formatter};

use seedhe_cmd_core::cheatsheets::CheatsheetStore;

/// Label of the main menu entry that opens chat mode
pub const AI_CHAT_LABEL: &str = "AI Chat";
/// Label of the main menu entry that ends the session
pub const EXIT_LABEL: &str = "Exit";

/// An entry of the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Topic(&'static str),
    Chat,
    Exit,
}

impl MenuChoice {
    /// All main menu entries: topics in store order, then chat, then exit.
    #[must_use]
    pub fn all(store: &CheatsheetStore) -> Vec<Self> {
        store
            .topics()
            .map(MenuChoice::Topic)
            .chain([MenuChoice::Chat, MenuChoice::Exit])
            .collect()
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuChoice::Topic(topic) => f.write_str(topic),
            MenuChoice::Chat => f.write_str(AI_CHAT_LABEL),
            MenuChoice::Exit => f.write_str(EXIT_LABEL),
        }
    }
}

/// What an input event means for an open selection list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// The option at this index (into the full option list) was picked
    Selected(usize),
    /// The user backed out without picking
    Cancelled,
    /// The input was closed (Ctrl-C or Ctrl-D)
    Closed,
    /// The list needs to be redrawn with this state
    Update(UiState),
    Ignore,
}

/// Direction to cycle through options in the selection UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the option list when there are more
/// options than can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the selection list.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Index into the currently displayed (filtered) options
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Whether the user is currently filtering
    pub is_filtering: bool,
    /// Current filter text
    pub filter_text: String,
}

impl UiState {
    /// Lines used by the title, the key hint bar and the filter line
    pub const RESERVED_ROWS: u16 = 3;

    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                height: height.saturating_sub(Self::RESERVED_ROWS),
                width,
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }
}
