//! Session loop tests driven by a scripted prompter, a recording clipboard
//! and a canned oracle.

use std::cell::RefCell;
use std::collections::VecDeque;

use seedhe_cmd_cli::command_selection::Prompter;
use seedhe_cmd_cli::session::{Mode, Session, MAIN_MENU_TITLE};
use seedhe_cmd_core::cheatsheets::CheatsheetStore;
use seedhe_cmd_core::clipboard::ClipboardSink;
use seedhe_cmd_core::error::{Error, Result};
use seedhe_cmd_core::oracle::CommandOracle;

/// Main menu position of "AI Chat" and "Exit" with the built-in topics
const AI_CHAT_INDEX: usize = 6;
const EXIT_INDEX: usize = 7;

#[derive(Debug, Clone, PartialEq)]
enum Asked {
    Select { title: String, options: Vec<String> },
    Line(String),
}

enum Reply {
    Pick(Option<usize>),
    Type(&'static str),
}

/// Answers prompts from a script; once the script runs out, the input is closed.
#[derive(Default)]
struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    asked: Vec<Asked>,
}

impl ScriptedPrompter {
    fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    fn titles(&self) -> Vec<String> {
        self.asked
            .iter()
            .map(|asked| match asked {
                Asked::Select { title, .. } => title.clone(),
                Asked::Line(prompt) => format!("line:{prompt}"),
            })
            .collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, title: &str, options: &[String]) -> Result<Option<usize>> {
        self.asked.push(Asked::Select {
            title: title.to_string(),
            options: options.to_vec(),
        });
        match self.replies.pop_front() {
            Some(Reply::Pick(choice)) => Ok(choice),
            Some(Reply::Type(text)) => panic!("Expected a selection, script has text `{text}`"),
            None => Err(Error::InputClosed),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(Asked::Line(prompt.to_string()));
        match self.replies.pop_front() {
            Some(Reply::Type(text)) => Ok(text.to_string()),
            Some(Reply::Pick(choice)) => panic!("Expected text, script has selection {choice:?}"),
            None => Err(Error::InputClosed),
        }
    }
}

#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<String>,
    broken: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.broken {
            return Err(Error::Clipboard("no clipboard utility found".to_string()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

enum OracleReply {
    Answer(&'static str),
    NoAnswer,
    Unavailable,
}

#[derive(Default)]
struct CannedOracle {
    replies: RefCell<VecDeque<OracleReply>>,
    queries: RefCell<Vec<String>>,
}

impl CannedOracle {
    fn new(replies: impl IntoIterator<Item = OracleReply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl CommandOracle for CannedOracle {
    fn ask(&self, query: &str) -> Result<Option<String>> {
        self.queries.borrow_mut().push(query.to_string());
        match self.replies.borrow_mut().pop_front() {
            Some(OracleReply::Answer(text)) => Ok(Some(text.to_string())),
            Some(OracleReply::NoAnswer) => Ok(None),
            Some(OracleReply::Unavailable) | None => Err(Error::OracleUnavailable(
                "error sending request: connection refused".to_string(),
            )),
        }
    }
}

/// Runs a full session and returns everything it printed.
fn run_session(
    operation: Option<&str>,
    prompter: &mut ScriptedPrompter,
    clipboard: &mut RecordingClipboard,
    oracle: &CannedOracle,
) -> String {
    let mut out = Vec::new();
    Session::new(CheatsheetStore::builtin(), prompter, clipboard, oracle, &mut out)
        .start(operation)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_topic_argument_opens_cheatsheet_first() {
    let mut prompter = ScriptedPrompter::new([Reply::Pick(Some(2))]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::default();

    let output = run_session(Some("git"), &mut prompter, &mut clipboard, &oracle);

    let titles = prompter.titles();
    assert_eq!(titles[0], "📜 GIT Cheatsheet - Select a command to copy:");
    assert_eq!(titles[1], MAIN_MENU_TITLE);

    let Asked::Select { options, .. } = &prompter.asked[0] else {
        panic!("Expected a selection first");
    };
    assert_eq!(options[0], "git init → Initialize a new repository");

    assert_eq!(clipboard.copied, vec!["git status"]);
    assert!(output.contains("Copied to clipboard: git status"));
}

#[test]
fn test_unknown_argument_reports_and_shows_main_menu() {
    let mut prompter = ScriptedPrompter::new([Reply::Pick(Some(EXIT_INDEX))]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::default();

    let output = run_session(Some("banana"), &mut prompter, &mut clipboard, &oracle);

    assert!(output.contains("Unknown operation: banana"));
    assert!(output
        .contains("Available operations: git, docker, linux, react, nextjs, nodejs, chat, exit"));
    assert_eq!(prompter.titles(), vec![MAIN_MENU_TITLE]);

    let message_at = output.find("Unknown operation").unwrap();
    let banner_at = output.find("Seedhe CMD").unwrap();
    assert!(banner_at < message_at);
}

#[test]
fn test_main_menu_lists_topics_then_chat_then_exit() {
    let mut prompter = ScriptedPrompter::new([Reply::Pick(Some(EXIT_INDEX))]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::default();

    run_session(None, &mut prompter, &mut clipboard, &oracle);

    assert_eq!(
        prompter.asked,
        vec![Asked::Select {
            title: MAIN_MENU_TITLE.to_string(),
            options: ["git", "docker", "linux", "react", "nextjs", "nodejs", "AI Chat", "Exit"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }]
    );
}

#[test]
fn test_exit_argument_terminates_without_prompting() {
    let mut prompter = ScriptedPrompter::default();
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::default();

    let output = run_session(Some("exit"), &mut prompter, &mut clipboard, &oracle);

    assert!(prompter.asked.is_empty());
    assert!(output.contains("Seedhe CMD"));
}

#[test]
fn test_chat_exit_in_any_case_returns_to_main_menu() {
    for exit_word in ["exit", "EXIT", "Exit"] {
        let mut prompter = ScriptedPrompter::new([Reply::Type(exit_word)]);
        let mut clipboard = RecordingClipboard::default();
        let oracle = CannedOracle::default();

        run_session(Some("chat"), &mut prompter, &mut clipboard, &oracle);

        assert_eq!(prompter.titles(), vec!["line:> ", MAIN_MENU_TITLE]);
        assert!(oracle.queries.borrow().is_empty());
    }
}

#[test]
fn test_oracle_failure_keeps_chat_going() {
    let mut prompter = ScriptedPrompter::new([
        Reply::Type("list files"),
        Reply::Type("show disk usage"),
        Reply::Type("exit"),
        Reply::Pick(Some(EXIT_INDEX)),
    ]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::new([
        OracleReply::Unavailable,
        OracleReply::Answer("`df -h`\n\nShows free space on every mounted filesystem."),
    ]);

    let output = run_session(Some("chat"), &mut prompter, &mut clipboard, &oracle);

    assert!(output.contains("Error: Failed to connect to AI!"));
    assert_eq!(
        *oracle.queries.borrow(),
        vec!["list files".to_string(), "show disk usage".to_string()]
    );
    assert!(output.contains("Shows free space on every mounted filesystem."));
    assert_eq!(clipboard.copied, vec!["df -h"]);
    assert!(output.contains("Command Copied to clipboard: df -h"));
}

#[test]
fn test_chat_from_main_menu_and_back() {
    let mut prompter = ScriptedPrompter::new([
        Reply::Pick(Some(AI_CHAT_INDEX)),
        Reply::Type("  exit  "),
        Reply::Pick(Some(EXIT_INDEX)),
    ]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::default();

    let output = run_session(None, &mut prompter, &mut clipboard, &oracle);

    assert!(output.contains("AI Chat Mode Enabled! Type 'exit' to quit."));
    assert_eq!(
        prompter.titles(),
        vec![MAIN_MENU_TITLE, "line:> ", MAIN_MENU_TITLE]
    );
}

#[test]
fn test_answer_without_text_is_reported() {
    let mut prompter = ScriptedPrompter::new([Reply::Type("undo last commit")]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::new([OracleReply::NoAnswer]);

    let output = run_session(Some("chat"), &mut prompter, &mut clipboard, &oracle);

    assert!(output.contains("No response!"));
    assert!(clipboard.copied.is_empty());
}

#[test]
fn test_answer_without_backticks_copies_nothing() {
    let mut prompter = ScriptedPrompter::new([Reply::Type("what is a shell")]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::new([OracleReply::Answer("A shell is a command interpreter.")]);

    let output = run_session(Some("chat"), &mut prompter, &mut clipboard, &oracle);

    assert!(output.contains("A shell is a command interpreter."));
    assert!(clipboard.copied.is_empty());
    assert!(!output.contains("Copied"));
}

#[test]
fn test_clipboard_failure_asks_for_manual_copy() {
    let mut prompter = ScriptedPrompter::new([Reply::Pick(Some(0)), Reply::Pick(Some(EXIT_INDEX))]);
    let mut clipboard = RecordingClipboard {
        broken: true,
        ..RecordingClipboard::default()
    };
    let oracle = CannedOracle::default();

    let output = run_session(Some("linux"), &mut prompter, &mut clipboard, &oracle);

    assert!(output.contains("Failed to copy to clipboard. Please copy manually: ls -la"));
    // The session went on to the main menu
    assert_eq!(prompter.titles().len(), 2);
}

#[test]
fn test_backing_out_of_cheatsheet_returns_to_main_menu() {
    let mut prompter = ScriptedPrompter::new([
        Reply::Pick(Some(1)),
        Reply::Pick(None),
        Reply::Pick(Some(EXIT_INDEX)),
    ]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::default();

    run_session(None, &mut prompter, &mut clipboard, &oracle);

    assert_eq!(
        prompter.titles(),
        vec![
            MAIN_MENU_TITLE.to_string(),
            "📜 DOCKER Cheatsheet - Select a command to copy:".to_string(),
            MAIN_MENU_TITLE.to_string(),
        ]
    );
    assert!(clipboard.copied.is_empty());
}

#[test]
fn test_backing_out_of_main_menu_terminates() {
    let mut prompter = ScriptedPrompter::new([Reply::Pick(None)]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::default();

    run_session(None, &mut prompter, &mut clipboard, &oracle);

    assert_eq!(prompter.asked.len(), 1);
}

#[test]
fn test_closed_input_in_chat_ends_session() {
    let mut prompter = ScriptedPrompter::new([Reply::Type("list files")]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::new([OracleReply::Answer("`ls`")]);

    run_session(Some("chat"), &mut prompter, &mut clipboard, &oracle);

    // One question, then the closed input ends the session without a main menu
    assert_eq!(prompter.titles(), vec!["line:> ", "line:> "]);
    assert_eq!(clipboard.copied, vec!["ls"]);
}

#[test]
fn test_unknown_topic_in_run_is_reported() {
    let mut prompter = ScriptedPrompter::new([Reply::Pick(Some(EXIT_INDEX))]);
    let mut clipboard = RecordingClipboard::default();
    let oracle = CannedOracle::default();
    let mut out = Vec::new();

    Session::new(
        CheatsheetStore::builtin(),
        &mut prompter,
        &mut clipboard,
        &oracle,
        &mut out,
    )
    .run(Mode::Cheatsheet("rust".to_string()))
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("No cheatsheet found for: rust"));
    assert_eq!(prompter.titles(), vec![MAIN_MENU_TITLE]);
}

#[test]
fn test_each_topic_copies_selected_command() {
    let store = CheatsheetStore::builtin();

    for topic in store.topics() {
        let entries = store.lookup(topic).unwrap();
        let last = entries.len() - 1;

        let mut prompter = ScriptedPrompter::new([Reply::Pick(Some(last))]);
        let mut clipboard = RecordingClipboard::default();
        let oracle = CannedOracle::default();

        run_session(Some(topic), &mut prompter, &mut clipboard, &oracle);

        assert_eq!(clipboard.copied, vec![entries[last].command.to_string()]);
    }
}
