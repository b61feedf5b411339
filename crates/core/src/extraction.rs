//! Pulls a runnable command out of a free-text answer.

use std::sync::LazyLock;

use regex::Regex;

static BACKTICKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("backtick pattern is valid"));

/// Returns the text inside the first pair of backticks that encloses at least
/// one character, or `None` if the answer contains no such pair.
///
/// Nothing is checked about the result beyond that; it may not be a shell
/// command at all.
///
/// ```
/// use seedhe_cmd_core::extraction::extract_command;
///
/// assert_eq!(extract_command("run `ls -la` now"), Some("ls -la"));
/// assert_eq!(extract_command("no backticks here"), None);
/// ```
#[must_use]
pub fn extract_command(text: &str) -> Option<&str> {
    BACKTICKED
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|command| command.as_str())
}
