//! Result presenter
//!
//! The presenter is the one stateful object behind the UI. It owns the input
//! buffer, the panel state, the current result and the toast slot, and it
//! exposes the operations the UI triggers:
//!
//! - [`Presenter::submit`] validates input, flips to Loading and hands back
//!   the request to dispatch (the caller runs it on the classifier)
//! - [`Presenter::settle`] applies the classifier outcome
//! - [`Presenter::clear`] resets everything to the idle state
//! - [`Presenter::load_sample`] fills the input with the sample sentence
//!
//! Nothing here touches the network or the terminal, so every state
//! transition is testable in isolation.

pub mod input;
pub mod notify;
pub mod palette;
pub mod render;
pub mod shortcuts;
pub mod state;

use crate::classifier::{AnalysisRequest, ClassifierError, EmotionScores};
use crate::config::PresenterConfig;
use input::InputTracker;
use notify::{Notifier, Severity};
use render::{ErrorView, ResultView};
use shortcuts::{Edit, Focus, SAMPLE_TEXT};
use state::{Panel, PanelState, UiState};
use std::time::{Duration, Instant};

pub const MSG_EMPTY_INPUT: &str = "Please enter some text to analyze.";
pub const MSG_SUCCESS: &str = "Analysis complete!";
pub const MSG_FAILURE: &str = "Analysis failed. Please try again.";
pub const MSG_IN_FLIGHT: &str = "Analysis already in progress.";

/// A request the caller must dispatch to the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Monotonic id, echoed back to [`Presenter::settle`]
    pub id: u64,
    pub request: AnalysisRequest,
}

/// UI state machine for the emotion analyzer
pub struct Presenter {
    input: InputTracker,
    panels: PanelState,
    result: Option<ResultView>,
    notifier: Notifier,
    focus: Focus,
    /// Id of the most recent in-flight submission
    pending: Option<u64>,
    next_id: u64,
    single_flight: bool,
    excerpt_len: usize,
    /// When the current result was shown (drives the bar stagger)
    revealed_at: Option<Instant>,
    result_scroll: u16,
}

impl Presenter {
    pub fn new(config: &PresenterConfig) -> Self {
        Self {
            input: InputTracker::new(config.emphasis_threshold),
            panels: PanelState::default(),
            result: None,
            notifier: Notifier::new(Duration::from_millis(config.toast_duration_ms)),
            focus: Focus::Input,
            pending: None,
            next_id: 1,
            single_flight: config.single_flight,
            excerpt_len: config.excerpt_len,
            revealed_at: None,
            result_scroll: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn ui_state(&self) -> UiState {
        self.panels.get()
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.panels.is_visible(panel)
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        self.revealed_at
    }

    pub fn result_scroll(&self) -> u16 {
        self.result_scroll
    }

    // ─────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Validate the input and enter the Loading state.
    ///
    /// Returns the request to dispatch, or `None` when nothing must be sent
    /// (empty input, or a request already in flight with single-flight on).
    pub fn submit(&mut self) -> Option<Submission> {
        let Some(request) = AnalysisRequest::from_raw(self.input.text()) else {
            self.notifier.notify(MSG_EMPTY_INPUT, Severity::Warning);
            self.focus = Focus::Input;
            return None;
        };

        if self.single_flight && self.pending.is_some() {
            tracing::debug!("Submission rejected: request already in flight");
            self.notifier.notify(MSG_IN_FLIGHT, Severity::Info);
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(id);
        self.panels.set(UiState::Loading);

        tracing::info!(
            "Submitting analysis #{} ({} chars)",
            id,
            request.text.chars().count()
        );

        Some(Submission { id, request })
    }

    /// Apply the outcome of submission `id`.
    ///
    /// Every path leaves the Loading state: success shows the result panel,
    /// failure shows the inline error panel. Outcomes for anything but the
    /// latest submission, or for one that was cleared, are dropped.
    pub fn settle(
        &mut self,
        id: u64,
        analyzed_text: &str,
        outcome: Result<EmotionScores, ClassifierError>,
    ) {
        if self.pending != Some(id) {
            tracing::debug!("Dropping stale outcome for analysis #{}", id);
            return;
        }
        self.pending = None;

        match outcome {
            Ok(scores) => {
                tracing::info!("Analysis #{} complete: {} emotion(s)", id, scores.len());
                self.result = Some(render::render(Some(&scores), analyzed_text, self.excerpt_len));
                self.panels.set(UiState::ResultShown);
                self.notifier.notify(MSG_SUCCESS, Severity::Success);
            }
            Err(err) => {
                tracing::warn!("Analysis #{} failed: {}", id, err);
                self.result = Some(ResultView::Error(ErrorView::new(err.user_message())));
                self.panels.set(UiState::ErrorShown);
                self.notifier.notify(MSG_FAILURE, Severity::Error);
            }
        }

        // Bring the result panel into view
        self.result_scroll = 0;
        self.revealed_at = Some(Instant::now());
    }

    /// Reset input, result and counter; show the idle panel; focus the input.
    ///
    /// An in-flight request is not cancelled, but its outcome will be dropped.
    pub fn clear(&mut self) {
        self.pending = None;
        self.input.clear();
        self.result = None;
        self.revealed_at = None;
        self.result_scroll = 0;
        self.panels.set(UiState::Idle);
        self.focus = Focus::Input;
    }

    /// Fill the input with the sample sentence, as if typed
    pub fn load_sample(&mut self) {
        self.set_input(SAMPLE_TEXT);
    }

    /// Replace the input text (fires the same counter update as typing)
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input.set_text(text);
    }

    /// Insert pasted text at the cursor and focus the input.
    ///
    /// Terminals deliver pasted line breaks as CR; they are stored as LF.
    pub fn paste(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.focus = Focus::Input;
        self.input.insert_str(&normalized);
    }

    /// Show a toast
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifier.notify(message, severity);
    }

    /// Drop the toast once it has fully exited
    pub fn prune_toast(&mut self) {
        self.notifier.prune();
    }

    /// Apply an editing keystroke to the input
    pub fn edit(&mut self, edit: Edit) {
        match edit {
            Edit::Insert(c) => self.input.insert_char(c),
            Edit::Newline => self.input.insert_char('\n'),
            Edit::Backspace => self.input.backspace(),
            Edit::Delete => self.input.delete(),
            Edit::Left => self.input.move_left(),
            Edit::Right => self.input.move_right(),
            Edit::Home => self.input.move_home(),
            Edit::End => self.input.move_end(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn scroll_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1);
    }

    /// Plain-text copy of the current result, if any
    pub fn copy_text(&self) -> Option<String> {
        self.result.as_ref().map(ResultView::to_plain_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> Presenter {
        Presenter::new(&PresenterConfig::default())
    }

    fn scores(entries: &[(&str, f64)]) -> EmotionScores {
        entries.iter().map(|(n, p)| (n.to_string(), *p)).collect()
    }

    fn toast(p: &Presenter) -> (String, Severity) {
        let t = p.notifier().current().expect("toast");
        (t.message.clone(), t.severity)
    }

    #[test]
    fn empty_submit_warns_without_request() {
        let mut p = presenter();
        p.input.set_text("   \n\t ");
        p.toggle_focus();

        assert!(p.submit().is_none());
        assert_eq!(toast(&p), (MSG_EMPTY_INPUT.to_string(), Severity::Warning));
        assert_eq!(p.focus(), Focus::Input);
        assert_eq!(p.ui_state(), UiState::Idle, "no panel change");
    }

    #[test]
    fn submit_sends_trimmed_text_and_shows_loading() {
        let mut p = presenter();
        p.input.set_text("  so happy  ");

        let sub = p.submit().unwrap();
        assert_eq!(sub.request.text, "so happy");
        assert_eq!(p.ui_state(), UiState::Loading);
        assert!(p.is_visible(Panel::Loading));
        assert!(!p.is_visible(Panel::Idle));
        assert!(!p.is_visible(Panel::Result));
    }

    #[test]
    fn success_renders_result_and_toasts() {
        let mut p = presenter();
        p.input.set_text("text");
        let sub = p.submit().unwrap();

        p.settle(sub.id, &sub.request.text, Ok(scores(&[("joy", 0.7), ("anger", 0.3)])));

        assert_eq!(p.ui_state(), UiState::ResultShown);
        assert!(!p.is_visible(Panel::Loading));
        assert!(!p.is_pending());
        assert_eq!(toast(&p), (MSG_SUCCESS.to_string(), Severity::Success));
        match p.result().unwrap() {
            ResultView::Ranked(r) => {
                assert_eq!(r.bars[0].label, "Joy");
                assert!(r.bars[0].dominant);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_scores_are_not_an_error() {
        let mut p = presenter();
        p.input.set_text("text");
        let sub = p.submit().unwrap();
        p.settle(sub.id, "text", Ok(EmotionScores::default()));

        assert_eq!(p.ui_state(), UiState::ResultShown);
        assert_eq!(p.result(), Some(&ResultView::NoEmotions));
    }

    #[test]
    fn failure_shows_inline_error_and_toast() {
        let mut p = presenter();
        p.input.set_text("text");
        let sub = p.submit().unwrap();

        let err = ClassifierError::from_error_body(
            500,
            "Internal Server Error",
            br#"{"error": "model unavailable"}"#,
        );
        p.settle(sub.id, "text", Err(err));

        assert_eq!(p.ui_state(), UiState::ErrorShown);
        assert!(p.is_visible(Panel::Result));
        assert!(!p.is_visible(Panel::Loading));
        assert_eq!(toast(&p), (MSG_FAILURE.to_string(), Severity::Error));
        match p.result().unwrap() {
            ResultView::Error(e) => {
                assert_eq!(e.message, "model unavailable");
                assert_eq!(e.remediation, render::ERROR_REMEDIATION);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unparsable_error_mentions_status() {
        let mut p = presenter();
        p.input.set_text("text");
        let sub = p.submit().unwrap();
        p.settle(
            sub.id,
            "text",
            Err(ClassifierError::from_error_body(500, "Internal Server Error", b"oops")),
        );
        match p.result().unwrap() {
            ResultView::Error(e) => assert!(e.message.contains("500")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn every_settle_leaves_loading() {
        let outcomes: Vec<Result<EmotionScores, ClassifierError>> = vec![
            Ok(scores(&[("joy", 1.0)])),
            Ok(EmotionScores::default()),
            Err(ClassifierError::Transport("connection refused".into())),
            Err(ClassifierError::MalformedResponse("bad".into())),
        ];
        for outcome in outcomes {
            let mut p = presenter();
            p.input.set_text("x");
            let sub = p.submit().unwrap();
            p.settle(sub.id, "x", outcome);
            assert_ne!(p.ui_state(), UiState::Loading);
            assert!(!p.is_visible(Panel::Loading));
        }
    }

    #[test]
    fn single_flight_rejects_second_submit() {
        let mut p = presenter();
        p.input.set_text("x");
        let first = p.submit().unwrap();

        assert!(p.submit().is_none());
        assert_eq!(toast(&p), (MSG_IN_FLIGHT.to_string(), Severity::Info));

        p.settle(first.id, "x", Ok(EmotionScores::default()));
        assert!(p.submit().is_some());
    }

    #[test]
    fn overlapping_submits_allowed_without_single_flight() {
        let config = PresenterConfig {
            single_flight: false,
            ..PresenterConfig::default()
        };
        let mut p = Presenter::new(&config);
        p.input.set_text("x");
        let first = p.submit().unwrap();
        let second = p.submit().unwrap();
        assert_ne!(first.id, second.id);

        // Older response is dropped; the newer one still owns the panel
        p.settle(first.id, "x", Ok(EmotionScores::default()));
        assert!(p.is_pending());
        assert_eq!(p.ui_state(), UiState::Loading);
        p.settle(second.id, "x", Ok(EmotionScores::default()));
        assert!(!p.is_pending());
        assert_eq!(p.ui_state(), UiState::ResultShown);
    }

    #[test]
    fn clear_during_flight_drops_the_late_outcome() {
        let mut p = presenter();
        p.input.set_text("first");
        let first = p.submit().unwrap();

        p.clear();
        assert!(!p.is_pending());
        assert_eq!(p.ui_state(), UiState::Idle);

        p.input.set_text("second");
        let second = p.submit().expect("resubmit after clear");

        p.settle(first.id, "first", Ok(scores(&[("anger", 0.9)])));
        assert_eq!(p.ui_state(), UiState::Loading);
        assert!(p.result().is_none());

        p.settle(second.id, "second", Ok(scores(&[("joy", 0.9)])));
        match p.result().unwrap() {
            ResultView::Ranked(r) => assert_eq!(r.bars[0].key, "joy"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn outcome_after_clear_keeps_idle_panel() {
        let mut p = presenter();
        p.input.set_text("text");
        let sub = p.submit().unwrap();
        p.clear();

        p.settle(sub.id, "text", Err(ClassifierError::Transport("down".into())));
        assert_eq!(p.ui_state(), UiState::Idle);
        assert!(p.notifier().current().is_none());
    }

    #[test]
    fn clear_restores_initial_state() {
        let mut p = presenter();
        p.input.set_text("y".repeat(250));
        let sub = p.submit().unwrap();
        p.settle(sub.id, "y", Err(ClassifierError::Transport("down".into())));
        p.toggle_focus();

        p.clear();

        assert_eq!(p.input().count_label(), "0 characters");
        assert!(!p.input().is_emphasized());
        assert_eq!(p.ui_state(), UiState::Idle);
        assert!(p.is_visible(Panel::Idle));
        assert!(p.result().is_none());
        assert_eq!(p.focus(), Focus::Input);
    }

    #[test]
    fn paste_keeps_tabs_and_normalizes_line_breaks() {
        let mut p = presenter();
        p.toggle_focus();
        p.paste("a\tb\r\nc\rd");

        assert_eq!(p.input().text(), "a\tb\nc\nd");
        assert_eq!(p.input().char_count(), 7);
        assert_eq!(p.focus(), Focus::Input);
    }

    #[test]
    fn sample_fills_input_and_counter() {
        let mut p = presenter();
        p.load_sample();
        assert_eq!(p.input().text(), SAMPLE_TEXT);
        assert_eq!(p.input().char_count(), SAMPLE_TEXT.chars().count());
    }

    #[test]
    fn settle_resets_scroll() {
        let mut p = presenter();
        p.input.set_text("x");
        p.scroll_down();
        p.scroll_down();
        let sub = p.submit().unwrap();
        p.settle(sub.id, "x", Ok(scores(&[("joy", 0.5)])));
        assert_eq!(p.result_scroll(), 0);
        assert!(p.revealed_at().is_some());
    }
}
