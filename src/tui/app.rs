// TUI application state
//
// Wraps the presenter with everything that only matters on a terminal:
// theme, particle backdrop, logs panel toggle, animation frame.

use super::clipboard;
use super::particles::ParticleField;
use super::theme::Theme;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::presenter::notify::Severity;
use crate::presenter::shortcuts::Action;
use crate::presenter::{Presenter, Submission};

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Main application state for the TUI
pub struct App {
    pub presenter: Presenter,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub particles: ParticleField,

    /// Logs panel visible below the main content
    pub show_logs: bool,
    pub should_quit: bool,

    /// Frame counter for spinner and particles
    pub animation_frame: usize,

    /// Shown in the title bar
    pub classifier_name: &'static str,
    pub endpoint: String,
}

impl App {
    pub fn new(config: &Config, classifier_name: &'static str, log_buffer: LogBuffer) -> Self {
        Self {
            presenter: Presenter::new(&config.presenter),
            theme: Theme::by_name(&config.theme),
            log_buffer,
            particles: ParticleField::default(),
            show_logs: false,
            should_quit: false,
            animation_frame: 0,
            classifier_name,
            endpoint: config.endpoint.clone(),
        }
    }

    /// Advance animations and drop expired toasts
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if !self.theme.particles.is_empty() {
            self.particles.tick();
        }
        self.presenter.prune_toast();
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Apply a mapped key action. Returns a submission the caller must dispatch.
    pub fn apply(&mut self, action: Action) -> Option<Submission> {
        match action {
            Action::Submit => return self.presenter.submit(),
            Action::Sample => self.presenter.load_sample(),
            Action::Clear => self.presenter.clear(),
            Action::Quit => self.should_quit = true,
            Action::CopyResult => self.copy_result(),
            Action::ToggleFocus => self.presenter.toggle_focus(),
            Action::ToggleLogs => self.show_logs = !self.show_logs,
            Action::ScrollUp => self.presenter.scroll_up(),
            Action::ScrollDown => self.presenter.scroll_down(),
            Action::Edit(edit) => self.presenter.edit(edit),
            Action::Ignore => {}
        }
        None
    }

    fn copy_result(&mut self) {
        let Some(text) = self.presenter.copy_text() else {
            self.presenter.notify("Nothing to copy yet", Severity::Info);
            return;
        };

        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.presenter.notify("Copied to clipboard", Severity::Success),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.presenter.notify("Failed to copy", Severity::Error);
            }
        }
    }
}
