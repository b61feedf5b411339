//! System clipboard access.
//!
//! Text is piped into whichever platform clipboard utility is available. On
//! Linux the Wayland tool is tried before the X11 ones.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Something that can receive copied text.
pub trait ClipboardSink {
    /// Copies `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] if the text could not be copied. Callers
    /// are expected to report this and carry on.
    fn copy(&mut self, text: &str) -> Result<()>;
}

impl<C: ClipboardSink + ?Sized> ClipboardSink for &mut C {
    fn copy(&mut self, text: &str) -> Result<()> {
        (**self).copy(text)
    }
}

/// A clipboard utility invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyProgram {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const PLATFORM_PROGRAMS: &[CopyProgram] = &[CopyProgram {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const PLATFORM_PROGRAMS: &[CopyProgram] = &[CopyProgram {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PLATFORM_PROGRAMS: &[CopyProgram] = &[
    CopyProgram {
        program: "wl-copy",
        args: &[],
    },
    CopyProgram {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    CopyProgram {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

/// Clipboard backed by the OS clipboard utilities.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    programs: Vec<CopyProgram>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_programs(PLATFORM_PROGRAMS.to_vec())
    }
}

impl SystemClipboard {
    /// Uses the given utilities, tried in order until one succeeds.
    #[must_use]
    pub fn with_programs(programs: Vec<CopyProgram>) -> Self {
        Self { programs }
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut failures = Vec::with_capacity(self.programs.len());

        for copy_program in &self.programs {
            match pipe_to(copy_program, text) {
                Ok(()) => {
                    debug!("Copied {} bytes with `{}`", text.len(), copy_program.program);
                    return Ok(());
                }
                Err(reason) => {
                    debug!("`{}` failed: {}", copy_program.program, reason);
                    failures.push(format!("{}: {}", copy_program.program, reason));
                }
            }
        }

        if failures.is_empty() {
            return Err(Error::Clipboard(
                "no clipboard utility is known for this platform".to_string(),
            ));
        }

        Err(Error::Clipboard(failures.join("; ")))
    }
}

/// Runs the utility with `text` on its stdin and waits for it to exit.
fn pipe_to(copy_program: &CopyProgram, text: &str) -> std::result::Result<(), String> {
    let mut child = Command::new(copy_program.program)
        .args(copy_program.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("could not start: {e}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        // A utility that exits early is judged by its exit status below
        match stdin.write_all(text.as_bytes()) {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                return Err(format!("could not write: {e}"));
            }
            _ => {}
        }
    }

    let status = child.wait().map_err(|e| format!("could not wait: {e}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("exited with {status}"))
    }
}
