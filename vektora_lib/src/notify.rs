//! User-facing notification seam.
//!
//! The mutation executor reports outcomes through a [`Notifier`] instead of
//! printing, so the library stays silent and the front end decides how a
//! notice is rendered.

use std::sync::Mutex;

/// Sink for localized success and error notices.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints notices to stderr. The CLI's rendering of a toast.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn success(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// One captured notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Buffers notices for assertions in tests.
#[derive(Default)]
pub struct BufferingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl BufferingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns every notice captured so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl Notifier for BufferingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Notice::Error(message.to_string()));
    }
}
