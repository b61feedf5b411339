//! Seedhe CMD Core Library
//!
//! This crate provides the core functionality for seedhe-cmd, a terminal helper
//! that hands out ready-to-paste shell commands, either from built-in
//! cheatsheets or by asking a remote AI model.
//!
//! # Key Features
//!
//! - **Cheatsheets**: Immutable, ordered command lists per topic (git, docker, ...)
//! - **Command Oracle**: Blocking Gemini client that answers free-text command requests
//! - **Command Extraction**: Finds the first backtick-quoted command in an answer
//! - **Clipboard**: Best-effort copy through the platform clipboard utilities
//! - **Configuration**: API key, model and endpoint from the environment or a `.env` file
//! - **Error Handling**: One error type covering every failure mode
//!
//! # Examples
//!
//! Looking up a cheatsheet:
//!
//! ```
//! use seedhe_cmd_core::cheatsheets::CheatsheetStore;
//!
//! let git = CheatsheetStore::builtin().lookup("git")?;
//! for entry in git {
//!     println!("{entry}");
//! }
//! # Ok::<(), seedhe_cmd_core::error::Error>(())
//! ```

pub mod cheatsheets;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod extraction;
pub mod oracle;
