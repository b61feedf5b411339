use std::io::{stdin, stdout, BufRead, Write};

use seedhe_cmd_core::error::{Error, Result};

use super::colors::{paint, Tone};

/// Prompts for a line of free text on the terminal
pub fn prompt_line(prompt: &str) -> Result<String> {
    read_line_from(&mut stdin().lock(), &mut stdout(), prompt)
}

/// Writes `prompt`, then reads one line without its line ending.
///
/// End of input fails with [`Error::InputClosed`] so callers stop asking.
pub fn read_line_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(writer, "{}", paint(prompt, Tone::Prompt))?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(Error::InputClosed);
    }

    Ok(input.trim_end_matches(&['\r', '\n'][..]).to_string())
}
