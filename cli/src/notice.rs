//! Short user-facing messages emitted by the form and card actions

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            NoticeKind::Success => "✔",
            NoticeKind::Error => "✘",
            NoticeKind::Info => "•",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

/// Collects notices in emission order. When `echo` is set each notice is
/// also printed to stderr as it arrives.
#[derive(Debug, Default)]
pub struct Notices {
    entries: Mutex<Vec<Notice>>,
    echo: bool,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echoing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            echo: true,
        }
    }

    pub fn push(&self, notice: Notice) {
        if self.echo {
            eprintln!("{}", notice);
        }
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(notice);
        }
    }

    pub fn last(&self) -> Option<Notice> {
        self.entries.lock().ok().and_then(|e| e.last().cloned())
    }

    pub fn all(&self) -> Vec<Notice> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}
