//! Presenter configuration: counter emphasis, excerpt length, toasts, submission policy

use serde::Deserialize;

/// Presenter behavior
#[derive(Debug, Clone, PartialEq)]
pub struct PresenterConfig {
    /// Character count above which the counter is emphasized
    pub emphasis_threshold: usize,
    /// Max chars of analyzed text echoed above the results
    pub excerpt_len: usize,
    /// Time from toast creation to auto-dismiss
    pub toast_duration_ms: u64,
    /// Reject a new submission while one is in flight
    pub single_flight: bool,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            emphasis_threshold: 200,
            excerpt_len: 60,
            toast_duration_ms: 3000,
            single_flight: true,
        }
    }
}

/// Presenter settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FilePresenter {
    pub emphasis_threshold: Option<usize>,
    pub excerpt_len: Option<usize>,
    pub toast_duration_ms: Option<u64>,
    pub single_flight: Option<bool>,
}

impl PresenterConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FilePresenter>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            emphasis_threshold: file
                .emphasis_threshold
                .unwrap_or(defaults.emphasis_threshold),
            excerpt_len: file.excerpt_len.unwrap_or(defaults.excerpt_len),
            toast_duration_ms: file.toast_duration_ms.unwrap_or(defaults.toast_duration_ms),
            single_flight: file.single_flight.unwrap_or(defaults.single_flight),
        }
    }
}
