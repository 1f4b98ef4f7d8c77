//! System clipboard access for copying analysis results
//!
//! Backed by `arboard`. A fresh handle is opened per copy so nothing stays
//! attached to the display server between presses.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put `text` on the system clipboard
///
/// Fails on headless Linux (no display server) or when access is denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .context("Failed to set clipboard text")?;
    tracing::debug!("Copied {} chars to clipboard", text.chars().count());
    Ok(())
}
