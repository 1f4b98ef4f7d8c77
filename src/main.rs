// moodscope - terminal front end for an emotion classifier
//
// Type or paste text, submit it to a classifier service, and see the detected
// emotions as ranked, colored bars.
//
// Architecture:
// - Classifier: trait seam over the HTTP `/predict` endpoint (or an offline demo)
// - Presenter: UI state machine (panels, counter, toasts, shortcuts, rendering model)
// - TUI (ratatui): draws the presenter and feeds it key events
// - CLI (clap): headless `analyze`, `health` and `config` commands
// - Logging: tracing into an in-memory buffer (TUI) or stderr, optionally to files

mod classifier;
mod cli;
mod config;
mod logging;
mod presenter;
mod tui;

use anyhow::Result;
use clap::Parser;
use classifier::{DemoClassifier, EmotionClassifier, HttpClassifier};
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up tracing for the chosen mode
///
/// TUI mode captures logs into `log_buffer` (stderr would garble the screen);
/// headless mode writes to stderr. File logging is added on top when enabled.
/// The returned guard must live until exit so buffered file logs are flushed.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(logging: &LoggingConfig, tui_mode: bool, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("moodscope={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = if logging.file_enabled {
        match std::fs::create_dir_all(&logging.file_dir) {
            Ok(()) => {
                let appender = match logging.file_rotation {
                    LogRotation::Hourly => {
                        tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Daily => {
                        tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Never => {
                        tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
                    }
                };
                // Writes happen on a background thread; JSON for structured parsing
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let tui_layer = tui_mode.then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Pick the classifier: offline demo or the configured HTTP endpoint
fn build_classifier(config: &Config) -> Result<Arc<dyn EmotionClassifier>> {
    if config.demo_mode {
        tracing::info!("Demo mode: scoring text offline");
        return Ok(Arc::new(DemoClassifier::default()));
    }

    let classifier =
        HttpClassifier::new(&config.endpoint, &config.predict_path, config.request_timeout())?;
    tracing::info!("Using classifier at {}", classifier.predict_url());
    Ok(Arc::new(classifier))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before anything touches the config file
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        return cli::run_config(show, reset, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    let tui_mode = cli.command.is_none();
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, tui_mode, &log_buffer);

    tracing::debug!("moodscope {} starting (theme: {})", config::VERSION, config.theme);

    match cli.command {
        Some(Commands::Analyze { text, json }) => {
            let classifier = build_classifier(&config)?;
            cli::run_analyze(&config, classifier, &text, json).await
        }
        Some(Commands::Health) => cli::run_health(&config).await,
        Some(Commands::Config { .. }) => Ok(()),
        None => {
            let classifier = build_classifier(&config)?;
            tui::run_tui(config, classifier, log_buffer).await
        }
    }
}
