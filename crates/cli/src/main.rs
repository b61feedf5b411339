use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use seedhe_cmd_cli::cli_args::Args;
use seedhe_cmd_cli::command_selection::colors::{paint, Tone};
use seedhe_cmd_cli::command_selection::TerminalPrompter;
use seedhe_cmd_cli::session::Session;
use seedhe_cmd_core::cheatsheets::CheatsheetStore;
use seedhe_cmd_core::clipboard::SystemClipboard;
use seedhe_cmd_core::config::{self, OracleConfig};
use seedhe_cmd_core::error::{Error, Result};
use seedhe_cmd_core::oracle::GeminiOracle;

/// Exit code when the API key is missing
const MISSING_API_KEY_EXIT_CODE: u8 = 2;

/// Load configuration; nothing interactive happens before this succeeds
fn initialize_config(args: &Args) -> Result<OracleConfig> {
    config::load_env_file(&args.env_file)?;

    let oracle_config = OracleConfig::from_env()?
        .with_model(args.model.clone())
        .with_base_url(args.base_url.clone());
    debug!("Oracle config: {:?}", oracle_config);

    Ok(oracle_config)
}

fn execute(args: &Args) -> Result<()> {
    let oracle_config = initialize_config(args)?;

    let mut session = Session::new(
        CheatsheetStore::builtin(),
        TerminalPrompter,
        SystemClipboard::default(),
        GeminiOracle::new(oracle_config),
        stdout(),
    );

    session.start(args.operation.as_deref())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::MissingApiKey { .. }) => {
            eprintln!("{}", paint(format!("❌ ERROR: {e}"), Tone::Failure));
            ExitCode::from(MISSING_API_KEY_EXIT_CODE)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
