use crate::error::CliError;
use base64::{prelude::BASE64_STANDARD, Engine};
use std::io::Write;
use std::sync::Mutex;

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), CliError>;
}

/// Terminal clipboard using the OSC 52 escape sequence, which most modern
/// terminal emulators (and tmux with `set-clipboard on`) forward to the
/// system clipboard.
pub struct Osc52Clipboard<W: Write> {
    out: Mutex<W>,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64_STANDARD.encode(text.as_bytes()))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&self, text: &str) -> Result<(), CliError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| CliError::Command("Clipboard writer is unavailable".to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Keeps the last copied text in memory
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Mutex<Option<String>>,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), CliError> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("Hi"), "\x1b]52;c;SGk=\x07");
    }

    #[test]
    fn test_osc52_clipboard_writes_sequence() {
        let clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy("Smart Triage").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, osc52_sequence("Smart Triage"));
    }
}
