//! Seedhe CMD CLI Library
//!
//! This crate provides the command-line interface for seedhe-cmd. It handles
//! the interactive menus, the chat prompt and the session loop that ties the
//! cheatsheets, the AI command oracle and the clipboard together.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`command_selection`]: Terminal UI for picking options and reading text
//! - [`session`]: The main menu / cheatsheet / chat state machine
//!
//! # Examples
//!
//! The CLI binary (`seedhe`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - shows the main menu
//! seedhe
//!
//! # Open a cheatsheet directly
//! seedhe git
//!
//! # Go straight to AI chat
//! seedhe chat
//!
//! # Use a specific .env file and model
//! seedhe --env-file ~/.seedhe.env --model gemini-1.5-pro chat
//! ```

pub mod cli_args;
pub mod command_selection;
pub mod session;
