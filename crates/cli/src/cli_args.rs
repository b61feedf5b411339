//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the seedhe CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use seedhe_cmd_cli::cli_args::Args;
///
/// let args = Args::parse_from(["seedhe", "git"]);
/// assert_eq!(args.operation.as_deref(), Some("git"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(version, about = "Shell command cheatsheets and an AI command helper")]
pub struct Args {
    /// What to open straight away: a cheatsheet topic, `chat` or `exit`.
    ///
    /// If not provided, the main menu is shown. Unknown values are reported
    /// and the main menu is shown instead.
    #[arg(num_args(1))]
    pub operation: Option<String>,

    /// Path to a `.env` file holding `GOOGLE_GEMINI_API_KEY`.
    ///
    /// If not provided, a `.env` in the current directory or one of its
    /// parents is used when present.
    #[arg(long, short = 'e')]
    pub env_file: Option<String>,

    /// Gemini model to ask in chat mode.
    ///
    /// Overrides `SEEDHE_GEMINI_MODEL`. Defaults to `gemini-2.0-flash`.
    #[arg(long, short = 'm')]
    pub model: Option<String>,

    /// Base URL of the Gemini API.
    ///
    /// Overrides `SEEDHE_GEMINI_BASE_URL`.
    #[arg(long)]
    pub base_url: Option<String>,
}
