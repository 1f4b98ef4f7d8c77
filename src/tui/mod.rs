// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, classifier outcomes)
// - Dispatching submissions to the classifier on background tasks

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod particles;
pub mod theme;
pub mod views;

use crate::classifier::{ClassifierError, EmotionClassifier, EmotionScores};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::presenter::shortcuts::map_key;
use crate::presenter::Submission;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Result of one classifier call, routed back to the event loop
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub id: u64,
    /// The text that was sent (the excerpt is built from this, not the live input)
    pub text: String,
    pub result: Result<EmotionScores, ClassifierError>,
}

/// Send a submission to the classifier on a background task
///
/// The outcome is delivered on `tx`; a closed receiver (app quitting) drops it.
pub fn dispatch(
    classifier: Arc<dyn EmotionClassifier>,
    submission: Submission,
    tx: mpsc::Sender<AnalysisOutcome>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let Submission { id, request } = submission;
        let text = request.text.clone();
        tracing::debug!("Dispatching analysis #{} to {}", id, classifier.name());

        let result = classifier.predict(request).await;
        if tx.send(AnalysisOutcome { id, text, result }).await.is_err() {
            tracing::debug!("Analysis #{} finished after UI shutdown", id);
        }
    })
}

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Pastes arrive as one event (bracketed paste). Where the terminal supports
/// the kitty keyboard protocol, modified Enter is reported so Ctrl+Enter can
/// submit.
pub async fn run_tui(
    config: Config,
    classifier: Arc<dyn EmotionClassifier>,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to setup terminal")?;

    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .context("Failed to enable keyboard enhancement")?;
    }
    tracing::debug!("Keyboard enhancement: {}", enhanced);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, classifier.name(), log_buffer);

    let result = run_event_loop(&mut terminal, &mut app, classifier).await;

    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
            .context("Failed to restore keyboard mode")?;
    }
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Terminal input (keys and pastes)
/// 2. Timer ticks (animations, toast expiry)
/// 3. Classifier outcomes from dispatched submissions
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    classifier: Arc<dyn EmotionClassifier>,
) -> Result<()> {
    // ~12 FPS for particles and bar growth
    let mut tick_interval = tokio::time::interval(Duration::from_millis(80));
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<AnalysisOutcome>(16);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Terminal input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(event) = event::read() {
                        handle_event(app, event, &classifier, &outcome_tx);
                    }
                }
            } => {}

            // Periodic tick for animation
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Classifier outcomes
            Some(outcome) = outcome_rx.recv() => {
                app.presenter.settle(outcome.id, &outcome.text, outcome.result);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Route one terminal event. Resizes need nothing: the next draw adapts.
fn handle_event(
    app: &mut App,
    event: Event,
    classifier: &Arc<dyn EmotionClassifier>,
    outcome_tx: &mpsc::Sender<AnalysisOutcome>,
) {
    match event {
        Event::Key(key_event) => handle_key_event(app, key_event, classifier, outcome_tx),
        Event::Paste(text) => app.presenter.paste(&text),
        _ => {}
    }
}

/// Map a key through the shortcut table and dispatch any resulting submission
fn handle_key_event(
    app: &mut App,
    key_event: KeyEvent,
    classifier: &Arc<dyn EmotionClassifier>,
    outcome_tx: &mpsc::Sender<AnalysisOutcome>,
) {
    let action = map_key(&key_event, app.presenter.focus());
    if let Some(submission) = app.apply(action) {
        dispatch(classifier.clone(), submission, outcome_tx.clone());
    }
}
