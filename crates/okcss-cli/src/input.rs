//! Where CSS snippets and state files come from.
//!
//! Stdin and the clipboard sit behind traits so tests can feed snippets
//! without a real pipe or a desktop session.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read clipboard: {0}")]
    Clipboard(String),

    #[error("no CSS given: pass a file, pipe a snippet or use --clipboard")]
    Missing,

    #[error("the snippet is empty")]
    Empty,
}

/// Abstraction over stdin.
pub trait StdinReader {
    /// True when stdin is interactive rather than piped.
    fn is_terminal(&self) -> bool;

    fn read_to_string(&self) -> io::Result<String>;
}

/// Abstraction over the system clipboard.
pub trait ClipboardReader {
    /// The clipboard text, `None` when it is empty.
    fn read(&self) -> Result<Option<String>, InputError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealClipboard;

impl ClipboardReader for RealClipboard {
    fn read(&self) -> Result<Option<String>, InputError> {
        let (program, args) = clipboard_command()?;
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| InputError::Clipboard(format!("{}: {}", program, e)))?;

        if !output.status.success() {
            return Ok(None);
        }
        let content = String::from_utf8_lossy(&output.stdout).to_string();
        Ok((!content.is_empty()).then_some(content))
    }
}

#[cfg(target_os = "macos")]
fn clipboard_command() -> Result<(&'static str, &'static [&'static str]), InputError> {
    Ok(("pbpaste", &[]))
}

#[cfg(target_os = "linux")]
fn clipboard_command() -> Result<(&'static str, &'static [&'static str]), InputError> {
    Ok(("xclip", &["-selection", "clipboard", "-o"]))
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn clipboard_command() -> Result<(&'static str, &'static [&'static str]), InputError> {
    Err(InputError::Clipboard(
        "clipboard not supported on this platform".to_string(),
    ))
}

/// Stdin stand-in for tests.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: String,
}

impl MockStdin {
    /// Interactive stdin with nothing piped.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: String::new(),
        }
    }

    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            is_terminal: false,
            content: content.into(),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }
}

/// Clipboard stand-in for tests.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    content: Option<String>,
}

impl MockClipboard {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }
}

impl ClipboardReader for MockClipboard {
    fn read(&self) -> Result<Option<String>, InputError> {
        Ok(self.content.clone())
    }
}

/// The process's input handles.
pub struct Inputs {
    pub stdin: Box<dyn StdinReader>,
    pub clipboard: Box<dyn ClipboardReader>,
}

impl Inputs {
    pub fn real() -> Self {
        Self {
            stdin: Box::new(RealStdin),
            clipboard: Box::new(RealClipboard),
        }
    }

    pub fn mock(stdin: MockStdin, clipboard: MockClipboard) -> Self {
        Self {
            stdin: Box::new(stdin),
            clipboard: Box::new(clipboard),
        }
    }

    /// Reads a snippet from `file`, the clipboard or piped stdin, in that
    /// order of preference. `-` names stdin explicitly.
    pub fn snippet(&self, file: Option<&Path>, clipboard: bool) -> Result<String, InputError> {
        let text = match file {
            Some(path) if path != Path::new("-") => read_file(path)?,
            Some(_) => self.stdin.read_to_string().map_err(InputError::Stdin)?,
            None if clipboard => self.clipboard.read()?.ok_or(InputError::Empty)?,
            None if !self.stdin.is_terminal() => {
                self.stdin.read_to_string().map_err(InputError::Stdin)?
            }
            None => return Err(InputError::Missing),
        };

        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }
        tracing::debug!(bytes = text.len(), "read snippet");
        Ok(text)
    }
}

pub fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })
}
