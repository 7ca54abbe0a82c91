//! User-facing collaborator surface.
//!
//! The core components never assume a rendering technology. They talk to
//! the host through two small traits: a transient-notice host and a
//! confirmation prompt. The terminal implementation lives here too; a
//! graphical host would supply its own.

use std::io::{BufRead, Write};
use std::time::Duration;

/// How long a transient notice stays visible before auto-dismissing.
pub const NOTICE_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Pause between a successful registration and the reset offer.
pub const RESET_PROMPT_DELAY: Duration = Duration::from_secs(2);

/// The kind of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// A recoverable problem the user should fix.
    Error,
    /// Positive feedback on a completed action.
    Success,
}

/// A transient user-facing message.
///
/// At most one notice of each kind is visible at a time: showing a new
/// one replaces any prior notice of the same kind. Hosts that can defer
/// dismiss each notice after [`NOTICE_DISPLAY_DURATION`] unless it was
/// already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Error or success.
    pub kind: NoticeKind,
    /// The message text.
    pub message: String,
}

impl Notice {
    /// Create an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Create a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// How long this notice stays visible on hosts that can defer.
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        NOTICE_DISPLAY_DURATION
    }
}

/// Host surface for transient notices.
pub trait NoticeHost {
    /// Show a notice, replacing any visible notice of the same kind.
    fn show(&mut self, notice: Notice);

    /// Dismiss the visible notice of the given kind, if any.
    fn dismiss(&mut self, kind: NoticeKind);

    /// Dismiss all visible notices.
    fn dismiss_all(&mut self) {
        self.dismiss(NoticeKind::Error);
        self.dismiss(NoticeKind::Success);
    }
}

/// Host surface for yes/no confirmation prompts.
pub trait ConfirmPrompt {
    /// Ask the user to confirm; `true` means confirmed.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Ask after a fixed delay.
    ///
    /// Hosts that cannot defer may ask immediately.
    fn confirm_after(&mut self, delay: Duration, prompt: &str) -> bool {
        let _ = delay;
        self.confirm(prompt)
    }
}

/// The full collaborator surface the intake flow needs.
pub trait FormUi: NoticeHost + ConfirmPrompt {}

impl<T: NoticeHost + ConfirmPrompt> FormUi for T {}

/// Terminal implementation of the collaborator surface.
///
/// Notices are printed immediately; the terminal cannot retract output,
/// so auto-dismissal does not apply and `dismiss` is a no-op.
#[derive(Debug, Default)]
pub struct ConsoleUi {
    eof: bool,
}

impl ConsoleUi {
    /// Create a terminal UI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a prompt and read one trimmed line from stdin.
    ///
    /// Returns an empty string when stdin is closed or unreadable; check
    /// [`ConsoleUi::eof`] to tell that apart from an empty answer.
    pub fn prompt(&mut self, label: &str) -> String {
        print!("{label}");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.eof = true;
                String::new()
            }
            Ok(_) => line.trim().to_string(),
        }
    }

    /// Whether stdin has been closed.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.eof
    }
}

impl NoticeHost for ConsoleUi {
    fn show(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => eprintln!("error: {}", notice.message),
            NoticeKind::Success => println!("{}", notice.message),
        }
    }

    fn dismiss(&mut self, _kind: NoticeKind) {}
}

impl ConfirmPrompt for ConsoleUi {
    fn confirm(&mut self, prompt: &str) -> bool {
        let answer = self.prompt(&format!("{prompt} [y/N] "));
        matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn confirm_after(&mut self, delay: Duration, prompt: &str) -> bool {
        std::thread::sleep(delay);
        self.confirm(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingHost {
        error: Option<String>,
        success: Option<String>,
    }

    impl NoticeHost for RecordingHost {
        fn show(&mut self, notice: Notice) {
            match notice.kind {
                NoticeKind::Error => self.error = Some(notice.message),
                NoticeKind::Success => self.success = Some(notice.message),
            }
        }

        fn dismiss(&mut self, kind: NoticeKind) {
            match kind {
                NoticeKind::Error => self.error = None,
                NoticeKind::Success => self.success = None,
            }
        }
    }

    #[test]
    fn test_notice_constructors() {
        let err = Notice::error("bad");
        assert_eq!(err.kind, NoticeKind::Error);
        assert_eq!(err.message, "bad");

        let ok = Notice::success("good");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.message, "good");
    }

    #[test]
    fn test_notice_display_duration() {
        assert_eq!(Notice::error("x").display_duration(), NOTICE_DISPLAY_DURATION);
        assert_eq!(NOTICE_DISPLAY_DURATION, Duration::from_secs(5));
        assert_eq!(RESET_PROMPT_DELAY, Duration::from_secs(2));
    }

    #[test]
    fn test_show_replaces_same_kind() {
        let mut host = RecordingHost::default();
        host.show(Notice::error("first"));
        host.show(Notice::error("second"));
        assert_eq!(host.error.as_deref(), Some("second"));
        assert!(host.success.is_none());
    }

    #[test]
    fn test_dismiss_all() {
        let mut host = RecordingHost::default();
        host.show(Notice::error("oops"));
        host.show(Notice::success("done"));
        host.dismiss_all();
        assert!(host.error.is_none());
        assert!(host.success.is_none());
    }

    #[test]
    fn test_console_ui_dismiss_is_noop() {
        let mut ui = ConsoleUi::new();
        ui.show(Notice::success("printed"));
        ui.dismiss(NoticeKind::Success);
        ui.dismiss_all();
    }
}
