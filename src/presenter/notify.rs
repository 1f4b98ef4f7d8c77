//! Notification service
//!
//! Holds at most one toast. A new toast replaces the current one on the
//! spot, without waiting for its exit transition. Each toast walks through
//! `Entering → Visible → Exiting → Gone` on a fixed clock:
//!
//! ```text
//! 0ms ── 10ms ─────────────── duration ── duration+300ms
//!  Entering      Visible          Exiting        Gone
//! ```

use std::time::{Duration, Instant};

/// Delay before a new toast is shown (lets the enter transition start)
pub const ENTER_DELAY: Duration = Duration::from_millis(10);
/// Default time from creation until auto-dismiss
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);
/// Exit transition before the toast is removed
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Lifecycle phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Exiting,
    Gone,
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity, duration: Duration) -> Self {
        Self {
            message: message.into(),
            severity,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Phase at a given instant
    pub fn phase_at(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < ENTER_DELAY {
            ToastPhase::Entering
        } else if elapsed < self.duration {
            ToastPhase::Visible
        } else if elapsed < self.duration + EXIT_TRANSITION {
            ToastPhase::Exiting
        } else {
            ToastPhase::Gone
        }
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase_at(Instant::now())
    }
}

/// Single-slot toast holder
#[derive(Debug)]
pub struct Notifier {
    current: Option<Toast>,
    duration: Duration,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show a toast, evicting whatever is on screen
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let toast = Toast::new(message, severity, self.duration);
        tracing::debug!("Toast [{}]: {}", severity.as_str(), toast.message);
        if let Some(old) = self.current.replace(toast) {
            tracing::trace!("Evicted toast: {}", old.message);
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the toast once its exit transition has finished
    pub fn prune_at(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|t| t.phase_at(now) == ToastPhase::Gone)
        {
            self.current = None;
        }
    }

    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}
