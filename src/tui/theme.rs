// Theme support for the TUI
//
// "neon" is the true-color cyberpunk palette with the particle backdrop.
// "plain" sticks to the terminal's ANSI palette and skips the animation.

use crate::logging::LogLevel;
use crate::presenter::notify::Severity;
use crate::presenter::palette::{self, EmotionColor};
use ratatui::style::Color;
use ratatui::widgets::BorderType;

impl From<EmotionColor> for Color {
    fn from(c: EmotionColor) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    pub title: Color,
    pub status_bar: Color,
    /// Counter color past the emphasis threshold
    pub emphasis: Color,
    /// Empty part of an emotion bar
    pub bar_track: Color,

    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,

    /// Particle glyph colors; empty disables the backdrop
    pub particles: Vec<Color>,

    /// Use each emotion's own color for its bar
    pub emotion_colors: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    /// Load theme by name (unknown names fall back to neon)
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "plain" => Self::plain(),
            _ => Self::neon(),
        }
    }

    pub fn neon() -> Self {
        Self {
            name: "neon",
            background: Color::Rgb(0x0a, 0x0a, 0x1a),
            foreground: Color::Rgb(0xe0, 0xe6, 0xff),
            muted: palette::MUTED_BLUE.into(),
            border: Color::Rgb(0x3a, 0x3f, 0x6b),
            border_focused: palette::NEON_BLUE.into(),
            border_type: BorderType::Rounded,
            title: palette::NEON_MAGENTA.into(),
            status_bar: palette::NEON_GREEN.into(),
            emphasis: palette::NEON_MAGENTA.into(),
            bar_track: Color::Rgb(0x1c, 0x1f, 0x3a),
            success: palette::NEON_GREEN.into(),
            error: Color::Rgb(0xff, 0x33, 0x66),
            warning: palette::NEON_YELLOW.into(),
            info: palette::NEON_BLUE.into(),
            particles: vec![
                palette::NEON_BLUE.into(),
                palette::NEON_MAGENTA.into(),
                palette::NEON_PURPLE.into(),
            ],
            emotion_colors: true,
        }
    }

    pub fn plain() -> Self {
        Self {
            name: "plain",
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            border_type: BorderType::Plain,
            title: Color::Cyan,
            status_bar: Color::Green,
            emphasis: Color::Magenta,
            bar_track: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            particles: Vec::new(),
            emotion_colors: false,
        }
    }

    /// Bar color for an emotion
    pub fn emotion(&self, color: EmotionColor, dominant: bool) -> Color {
        if self.emotion_colors {
            color.into()
        } else if dominant {
            Color::Cyan
        } else {
            Color::Blue
        }
    }

    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }

    pub fn log_level(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.error,
            LogLevel::Warn => self.warning,
            LogLevel::Info => self.info,
            LogLevel::Debug => self.muted,
            LogLevel::Trace => self.border,
        }
    }
}
