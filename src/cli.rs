// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - analyze <TEXT>: run one analysis headless and print the result
// - health: probe the classifier's /health endpoint
// - config --show|--path|--reset: configuration management
//
// No subcommand starts the TUI.

use crate::classifier::{EmotionClassifier, EmotionScores, HttpClassifier};
use crate::config::{Config, VERSION};
use crate::presenter::render::ResultView;
use crate::presenter::state::UiState;
use crate::presenter::Presenter;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;

/// moodscope - terminal front end for an emotion classifier
#[derive(Parser)]
#[command(name = "moodscope")]
#[command(version = VERSION)]
#[command(about = "Analyze the emotions in a piece of text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze text once and print the ranked emotions
    Analyze {
        /// Text to analyze
        text: String,

        /// Print the raw scores as JSON instead of bars
        #[arg(long)]
        json: bool,
    },

    /// Check that the classifier service is up
    Health,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run a headless analysis through the same presenter the TUI uses
pub async fn run_analyze(
    config: &Config,
    classifier: Arc<dyn EmotionClassifier>,
    text: &str,
    json: bool,
) -> Result<()> {
    analyze_into(&mut std::io::stdout(), config, classifier, text, json).await
}

/// Analyze `text` and write the result to `out`. Failures write nothing.
async fn analyze_into(
    out: &mut impl Write,
    config: &Config,
    classifier: Arc<dyn EmotionClassifier>,
    text: &str,
    json: bool,
) -> Result<()> {
    let mut presenter = Presenter::new(&config.presenter);
    presenter.set_input(text);

    let Some(submission) = presenter.submit() else {
        bail!("Please enter some text to analyze.");
    };

    let analyzed = submission.request.text.clone();
    let outcome = classifier.predict(submission.request).await;

    let raw_scores: Option<EmotionScores> = outcome.as_ref().ok().cloned();
    presenter.settle(submission.id, &analyzed, outcome);

    if let Some(ResultView::Ranked(ranked)) = presenter.result() {
        if let Some(top) = ranked.dominant() {
            tracing::info!("Dominant emotion: {} ({})", top.label, top.width);
        }
    }

    if presenter.ui_state() == UiState::ErrorShown {
        let message = match presenter.result() {
            Some(ResultView::Error(err)) => err.message.clone(),
            _ => "Analysis failed".to_string(),
        };
        bail!(message);
    }

    if json {
        if let Some(scores) = raw_scores {
            let body = serde_json::json!({ "emotions": scores });
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
    } else if let Some(view) = presenter.result() {
        write!(out, "{}", view.to_plain_text())?;
    }
    Ok(())
}

/// Probe `{endpoint}/health` and print the reported status
pub async fn run_health(config: &Config) -> Result<()> {
    let classifier =
        HttpClassifier::new(&config.endpoint, &config.predict_path, config.request_timeout())?;

    match classifier.health().await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(e) => bail!("Classifier at {} is not healthy: {}", config.endpoint, e),
    }
}

/// Handle `config` flags
pub fn run_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show();
        Ok(())
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: moodscope config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!("# demo mode: {}", config.demo_mode);
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&path, Config::default().to_toml()).context("Failed to write config")?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::DemoClassifier;
    use clap::CommandFactory;
    use std::time::Duration;

    fn demo() -> Arc<dyn EmotionClassifier> {
        Arc::new(DemoClassifier::new(Duration::from_millis(1)))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze_with_json_flag() {
        let cli = Cli::try_parse_from(["moodscope", "analyze", "so happy", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Analyze { text, json }) => {
                assert_eq!(text, "so happy");
                assert!(json);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["moodscope"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[tokio::test]
    async fn analyze_succeeds_with_demo_classifier() {
        let result = run_analyze(&Config::default(), demo(), "I love this", false).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn analyze_rejects_blank_text() {
        let err = run_analyze(&Config::default(), demo(), "   ", false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("enter some text"));
    }

    #[tokio::test]
    async fn failed_analysis_prints_nothing() {
        let mut out = Vec::new();
        let result = analyze_into(&mut out, &Config::default(), demo(), "please #fail", false).await;
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn successful_analysis_prints_bars() {
        let mut out = Vec::new();
        analyze_into(&mut out, &Config::default(), demo(), "I love this", false)
            .await
            .unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Love"));
    }

    #[tokio::test]
    async fn json_output_wraps_scores() {
        let mut out = Vec::new();
        analyze_into(&mut out, &Config::default(), demo(), "I love this", true)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(body["emotions"].is_object());
    }

    #[tokio::test]
    async fn analyze_failure_is_an_error() {
        let err = run_analyze(&Config::default(), demo(), "please #fail", true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("demo failure"));
    }
}
