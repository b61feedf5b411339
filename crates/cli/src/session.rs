//! The interactive session loop.
//!
//! A session moves between the main menu, a cheatsheet and chat mode until it
//! is terminated. Each state runs one action and hands back the next state;
//! the loop itself never recurses.
//!
//! Failures that leave the session usable (unknown topic, clipboard trouble,
//! an unreachable AI service) are printed and the session carries on. Closed
//! input ends the session.

use std::io::Write;

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::PrintStyledContent;
use crossterm::terminal::{Clear, ClearType};
use itertools::Itertools;
use log::{debug, info, warn};
use seedhe_cmd_core::cheatsheets::CheatsheetStore;
use seedhe_cmd_core::clipboard::ClipboardSink;
use seedhe_cmd_core::error::{Error, Result};
use seedhe_cmd_core::extraction::extract_command;
use seedhe_cmd_core::oracle::CommandOracle;

use crate::command_selection::colors::{paint, Tone};
use crate::command_selection::{MenuChoice, Prompter};

/// Startup operation that opens chat mode
pub const CHAT_OPERATION: &str = "chat";
/// Startup operation, and chat keyword, that leaves
pub const EXIT_OPERATION: &str = "exit";

pub const BANNER: &str = "Seedhe CMD";
pub const MAIN_MENU_TITLE: &str = "Choose an option:";
pub const CHAT_PROMPT: &str = "> ";

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    MainMenu,
    Cheatsheet(String),
    Chat,
    Terminated,
}

/// Resolves the optional startup operation to the first mode.
///
/// Topic names take precedence over `chat` and `exit`.
///
/// # Errors
///
/// Returns [`Error::UnknownOperation`] if the operation is neither a topic
/// nor `chat`/`exit`.
pub fn resolve_startup(operation: Option<&str>, store: &CheatsheetStore) -> Result<Mode> {
    match operation {
        None => Ok(Mode::MainMenu),
        Some(topic) if store.contains(topic) => Ok(Mode::Cheatsheet(topic.to_string())),
        Some(CHAT_OPERATION) => Ok(Mode::Chat),
        Some(EXIT_OPERATION) => Ok(Mode::Terminated),
        Some(unknown) => Err(Error::UnknownOperation(unknown.to_string())),
    }
}

/// Every startup operation, comma separated
#[must_use]
pub fn available_operations(store: &CheatsheetStore) -> String {
    store
        .topics()
        .chain([CHAT_OPERATION, EXIT_OPERATION])
        .join(", ")
}

/// Whether a chat line asks to leave chat mode
#[must_use]
pub fn is_exit_request(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_OPERATION)
}

#[must_use]
pub fn cheatsheet_title(topic: &str) -> String {
    format!(
        "📜 {} Cheatsheet - Select a command to copy:",
        topic.to_uppercase()
    )
}

/// One interactive session over a prompter, a clipboard, an oracle and an output.
pub struct Session<'a, P, C, O, W> {
    store: &'a CheatsheetStore,
    prompter: P,
    clipboard: C,
    oracle: O,
    out: W,
}

impl<'a, P, C, O, W> Session<'a, P, C, O, W>
where
    P: Prompter,
    C: ClipboardSink,
    O: CommandOracle,
    W: Write,
{
    pub fn new(store: &'a CheatsheetStore, prompter: P, clipboard: C, oracle: O, out: W) -> Self {
        Self {
            store,
            prompter,
            clipboard,
            oracle,
            out,
        }
    }

    /// Prints the banner, applies the startup operation and runs until terminated.
    ///
    /// # Errors
    ///
    /// Returns an error only when the terminal itself fails.
    pub fn start(&mut self, operation: Option<&str>) -> Result<()> {
        writeln!(self.out, "{}", paint(BANNER, Tone::Banner))?;

        let initial_mode = match resolve_startup(operation, self.store) {
            Ok(mode) => mode,
            Err(e @ Error::UnknownOperation(_)) => {
                self.report_failure(&e)?;
                writeln!(
                    self.out,
                    "{}",
                    paint(
                        format!("Available operations: {}", available_operations(self.store)),
                        Tone::Muted
                    )
                )?;
                Mode::MainMenu
            }
            Err(e) => return Err(e),
        };

        self.run(initial_mode)
    }

    /// Runs the state machine from `initial_mode` until it reaches [`Mode::Terminated`].
    ///
    /// # Errors
    ///
    /// Returns an error only when the terminal itself fails.
    pub fn run(&mut self, initial_mode: Mode) -> Result<()> {
        let mut mode = initial_mode;

        loop {
            debug!("Session mode: {:?}", mode);

            let next_mode = match &mode {
                Mode::MainMenu => self.main_menu(),
                Mode::Cheatsheet(topic) => self.show_cheatsheet(topic).map(|()| Mode::MainMenu),
                Mode::Chat => self.chat().map(|()| Mode::MainMenu),
                Mode::Terminated => return Ok(()),
            };

            mode = match next_mode {
                Ok(next_mode) => next_mode,
                Err(Error::InputClosed) => {
                    info!("Input closed, ending session");
                    Mode::Terminated
                }
                Err(e) if e.is_recoverable() => {
                    self.report_failure(&e)?;
                    Mode::MainMenu
                }
                Err(e) => return Err(e),
            };
        }
    }

    fn main_menu(&mut self) -> Result<Mode> {
        let choices = MenuChoice::all(self.store);
        let labels: Vec<String> = choices.iter().map(ToString::to_string).collect();

        let selected = self
            .prompter
            .select(MAIN_MENU_TITLE, &labels)?
            .and_then(|index| choices.get(index));

        Ok(match selected {
            Some(MenuChoice::Topic(topic)) => Mode::Cheatsheet((*topic).to_string()),
            Some(MenuChoice::Chat) => Mode::Chat,
            // Backing out of the main menu leaves too
            Some(MenuChoice::Exit) | None => Mode::Terminated,
        })
    }

    fn show_cheatsheet(&mut self, topic: &str) -> Result<()> {
        let entries = self.store.lookup(topic)?;
        let labels: Vec<String> = entries.iter().map(ToString::to_string).collect();

        let selected = self
            .prompter
            .select(&cheatsheet_title(topic), &labels)?
            .and_then(|index| entries.get(index));

        match selected {
            Some(entry) => self.copy_to_clipboard(entry.command, "Copied to clipboard"),
            None => {
                debug!("Nothing selected from `{}`", topic);
                Ok(())
            }
        }
    }

    fn chat(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            paint(
                "💬 AI Chat Mode Enabled! Type 'exit' to quit.",
                Tone::Heading
            )
        )?;
        self.out.flush()?;

        loop {
            let question = self.prompter.read_line(CHAT_PROMPT)?;
            if is_exit_request(&question) {
                return Ok(());
            }

            self.answer(&question)?;
        }
    }

    fn answer(&mut self, question: &str) -> Result<()> {
        queue!(
            self.out,
            PrintStyledContent(paint("🤖 AI Thinking...", Tone::Thinking))
        )?;
        self.out.flush()?;

        let answer = self.oracle.ask(question);

        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;

        match answer {
            Ok(Some(answer)) => {
                writeln!(self.out, "{}", paint("🤖 AI Answer:", Tone::Success))?;
                writeln!(self.out, "{answer}")?;

                match extract_command(&answer) {
                    Some(command) => {
                        self.copy_to_clipboard(command, "Command Copied to clipboard")?;
                    }
                    None => debug!("No backticked command in the answer"),
                }
            }
            Ok(None) => {
                writeln!(self.out, "{}", paint("🤖 AI Answer:", Tone::Success))?;
                writeln!(self.out, "{}", paint("❌ No response!", Tone::Failure))?;
            }
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                writeln!(
                    self.out,
                    "{}",
                    paint("❌ Error: Failed to connect to AI!", Tone::Failure)
                )?;
                writeln!(self.out, "{}", paint(&e, Tone::Muted))?;
            }
            Err(e) => return Err(e),
        }

        self.out.flush()?;
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str, success_message: &str) -> Result<()> {
        match self.clipboard.copy(text) {
            Ok(()) => writeln!(
                self.out,
                "{}",
                paint(format!("✅ {success_message}: {text}"), Tone::Success)
            )?,
            Err(e) => {
                warn!("{}", e);
                writeln!(
                    self.out,
                    "{}",
                    paint(
                        format!("❌ Failed to copy to clipboard. Please copy manually: {text}"),
                        Tone::Failure
                    )
                )?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn report_failure(&mut self, error: &Error) -> Result<()> {
        writeln!(self.out, "{}", paint(format!("❌ {error}"), Tone::Failure))?;
        self.out.flush()?;
        Ok(())
    }
}
