use std::fmt::Display;
use std::io::{stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{
    Attribute, Color, Print, PrintStyledContent, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;
use seedhe_cmd_core::error::{Error, Result};

use super::colors::{paint, Tone};
use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, SelectionEvent, UiState, ViewportState};

/// Terminal row of the first option; the title and key hints sit above it
const FIRST_OPTION_ROW: u16 = 2;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Shows `options` under `title` and waits for the user to pick one.
///
/// Returns the index of the picked option, or `None` if there is nothing to
/// pick or the user backed out with `q`/`Esc`.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] on Ctrl-C or Ctrl-D, and [`Error::Stdio`]
/// if the terminal cannot be driven.
pub fn prompt_for_selection(title: &str, options: &[String]) -> Result<Option<usize>> {
    if options.is_empty() {
        debug!("Nothing to select for `{}`", title);
        return Ok(None);
    }

    let mut stdout = stdout();
    // Restores the terminal on drop, even if setup fails part way
    let _raw_mode_guard = RawModeGuard;
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(cursor::Hide)?;

    let (width, height) = terminal::size()?;
    let mut ui_state = UiState::new(width, height);
    let mut indexes_to_display = filter_displayed_indexes(options, &ui_state.filter_text);

    redraw_ui(title, options, &ui_state, &indexes_to_display)?;

    loop {
        let selection_event = match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                handle_key_event(key_event, &ui_state, &indexes_to_display)
            }
            Event::Mouse(mouse_event) => {
                handle_mouse_event(mouse_event, &ui_state, &indexes_to_display)
            }
            Event::Resize(width, height) => {
                SelectionEvent::Update(handle_resize(width, height, &ui_state))
            }
            _ => SelectionEvent::Ignore,
        };

        match selection_event {
            SelectionEvent::Selected(index) => return Ok(Some(index)),
            SelectionEvent::Cancelled => return Ok(None),
            SelectionEvent::Closed => return Err(Error::InputClosed),
            SelectionEvent::Update(mut new_state) => {
                if new_state.filter_text != ui_state.filter_text {
                    indexes_to_display = filter_displayed_indexes(options, &new_state.filter_text);
                    new_state.selected_index = 0;
                    new_state.viewport.offset = 0;
                }

                if new_state != ui_state {
                    ui_state = new_state;
                    redraw_ui(title, options, &ui_state, &indexes_to_display)?;
                }
            }
            SelectionEvent::Ignore => {}
        }
    }
}

fn redraw_ui(
    title: &str,
    options: &[String],
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> Result<()> {
    let mut stdout = stdout();

    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        PrintStyledContent(paint(title, Tone::Heading))
    )?;

    print_header(ui_state, indexes_to_display.len())?;

    if indexes_to_display.is_empty() {
        queue!(
            stdout,
            MoveTo(0, FIRST_OPTION_ROW),
            SetForegroundColor(Color::Red),
            Print("No matching options!"),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        print_options_with_selection(options, ui_state, indexes_to_display)?;
    }

    if ui_state.is_filtering {
        queue!(
            stdout,
            MoveTo(0, FIRST_OPTION_ROW + ui_state.viewport.height),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Print the key hint bar under the title
fn print_header(ui_state: &UiState, display_count: usize) -> Result<()> {
    let mut stdout = stdout();

    let left_padding_size = 2usize;
    let left_padding = " ".repeat(left_padding_size);

    let instructions = if ui_state.is_filtering {
        "<esc>: Stop Filtering".to_string()
    } else {
        format!(
            "↑/↓: Move   |   /: Filter   |   {}   |   q: Back",
            position_counter(ui_state.selected_index, display_count)
        )
    };

    let right_padding = " ".repeat(
        (ui_state.viewport.width as usize)
            .saturating_sub(left_padding_size + instructions.chars().count()),
    );

    queue!(
        stdout,
        MoveTo(0, 1),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
/// "selected/total", or "0/0" when nothing is displayed
fn position_counter(selected_index: usize, display_count: usize) -> String {
    let position = if display_count == 0 {
        0
    } else {
        selected_index + 1
    };
    format!(
        "{}/{}",
        pad_to_width_of(position, display_count),
        display_count
    )
}

fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// Clear and write one option row
fn clear_and_write_option_row(
    row: u16,
    label: &str,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    let mut stdout = stdout();
    let terminal_width = terminal_width as usize;

    queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let content: String = format!(" {label}").chars().take(terminal_width).collect();
    let padding = " ".repeat(terminal_width.saturating_sub(content.chars().count()));

    if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    }

    queue!(
        stdout,
        Print(content),
        Print(padding),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print the visible options with the selected one highlighted
fn print_options_with_selection(
    options: &[String],
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> Result<()> {
    let viewport = &ui_state.viewport;

    let visible_options = indexes_to_display
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (row, (display_index, option_index)) in (FIRST_OPTION_ROW..).zip(visible_options) {
        clear_and_write_option_row(
            row,
            &options[*option_index],
            display_index == ui_state.selected_index,
            viewport.width,
        )?;
    }

    Ok(())
}

/// Map a key press to what it means for the list
pub(crate) fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> SelectionEvent {
    let control = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let moved = |direction| {
        SelectionEvent::Update(move_selected_index(
            ui_state,
            indexes_to_display.len(),
            direction,
        ))
    };

    match key_event.code {
        KeyCode::Char('c' | 'd') if control => SelectionEvent::Closed,
        KeyCode::Up => moved(Up),
        KeyCode::Down => moved(Down),
        KeyCode::Enter => indexes_to_display
            .get(ui_state.selected_index)
            .map_or(SelectionEvent::Ignore, |index| SelectionEvent::Selected(*index)),
        KeyCode::Backspace if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.pop();
            SelectionEvent::Update(updated_state)
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = false;
            updated_state.filter_text.clear();
            SelectionEvent::Update(updated_state)
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut updated_state = ui_state.clone();
            updated_state.filter_text.push(c);
            SelectionEvent::Update(updated_state)
        }
        KeyCode::Char('/') => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = true;
            SelectionEvent::Update(updated_state)
        }
        KeyCode::Char('k') => moved(Up),
        KeyCode::Char('j') => moved(Down),
        KeyCode::Char('q') | KeyCode::Esc => SelectionEvent::Cancelled,
        _ => SelectionEvent::Ignore,
    }
}

/// Map a mouse event to what it means for the list
pub(crate) fn handle_mouse_event(
    mouse_event: MouseEvent,
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> SelectionEvent {
    if mouse_event.modifiers != KeyModifiers::NONE {
        return SelectionEvent::Ignore;
    }

    match mouse_event.kind {
        MouseEventKind::ScrollDown => SelectionEvent::Update(move_selected_index(
            ui_state,
            indexes_to_display.len(),
            Down,
        )),
        MouseEventKind::ScrollUp => SelectionEvent::Update(move_selected_index(
            ui_state,
            indexes_to_display.len(),
            Up,
        )),
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(row_in_list) = mouse_event.row.checked_sub(FIRST_OPTION_ROW) else {
                // Click on title or header
                return SelectionEvent::Ignore;
            };
            if row_in_list >= ui_state.viewport.height {
                return SelectionEvent::Ignore;
            }

            indexes_to_display
                .get(ui_state.viewport.offset + row_in_list as usize)
                .map_or(SelectionEvent::Ignore, |index| SelectionEvent::Selected(*index))
        }
        _ => SelectionEvent::Ignore,
    }
}

/// Handle window resize events
pub(crate) fn handle_resize(width: u16, height: u16, ui_state: &UiState) -> UiState {
    let new_height = height.saturating_sub(UiState::RESERVED_ROWS);
    let mut ui_state = ui_state.clone();
    let mut new_viewport = ViewportState {
        width,
        height: new_height,
        offset: ui_state.viewport.offset,
    };

    match new_height.cmp(&ui_state.viewport.height) {
        // If growing taller, try to show more items above current selection
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = new_height - ui_state.viewport.height;
            new_viewport.offset = new_viewport
                .offset
                .saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less
            if ui_state.selected_index >= new_viewport.offset + new_height as usize =>
        {
            new_viewport.offset = ui_state
                .selected_index
                .saturating_sub((new_height as usize).saturating_sub(1));
        }
        _ => {}
    }

    ui_state.viewport = new_viewport;
    ui_state
}

/// Move the selected index in the given direction, wrapping at both ends
pub(crate) fn move_selected_index(
    ui_state: &UiState,
    display_length: usize,
    direction: CycleDirection,
) -> UiState {
    if display_length == 0 {
        return ui_state.clone();
    }

    let mut ui_state = ui_state.clone();
    let visible_rows = (ui_state.viewport.height as usize).max(1);
    let current_index = ui_state.selected_index.min(display_length - 1);

    let new_index = match direction {
        Up if current_index == 0 => display_length - 1,
        Up => current_index - 1,
        Down => (current_index + 1) % display_length,
    };

    if new_index < ui_state.viewport.offset {
        ui_state.viewport.offset = new_index;
    } else if new_index >= ui_state.viewport.offset + visible_rows {
        ui_state.viewport.offset = new_index + 1 - visible_rows;
    }

    ui_state.selected_index = new_index;
    ui_state
}

/// Indexes of the options matching the filter text, in display order
pub(crate) fn filter_displayed_indexes(options: &[String], filter_text: &str) -> Vec<usize> {
    if filter_text.is_empty() {
        return (0..options.len()).collect();
    }

    let matcher = SkimMatcherV2::default();

    options
        .iter()
        .enumerate()
        .filter_map(|(i, option)| matcher.fuzzy_match(option, filter_text).map(|_| i))
        .collect()
}
