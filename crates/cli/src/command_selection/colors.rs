use std::fmt::Display;

use crossterm::style::{Color, StyledContent, Stylize};

/// The kinds of console message the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Banner,
    Heading,
    Prompt,
    Thinking,
    Success,
    Failure,
    Muted,
}

/// Trait for converting a tone to a terminal color
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Color;
}

impl AsTermColor for Tone {
    fn as_crossterm_color(&self) -> Color {
        match self {
            Tone::Banner => Color::Cyan,
            Tone::Heading => Color::Yellow,
            Tone::Prompt | Tone::Success => Color::Green,
            Tone::Thinking => Color::Blue,
            Tone::Failure => Color::Red,
            Tone::Muted => Color::DarkGrey,
        }
    }
}

/// Styles `text` for printing in the given tone.
pub fn paint<D: Display>(text: D, tone: Tone) -> StyledContent<String> {
    let styled = text.to_string().with(tone.as_crossterm_color());

    match tone {
        Tone::Heading | Tone::Banner => styled.bold(),
        _ => styled,
    }
}
