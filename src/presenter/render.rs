//! Result rendering
//!
//! Turns classifier scores into a framework-agnostic view model. The TUI
//! draws it with ratatui; the headless `analyze` command and the clipboard
//! copy use [`ResultView::to_plain_text`].

use super::palette::{color_for, EmotionColor};
use crate::classifier::EmotionScores;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Entrance animation stagger per bar
pub const BAR_STAGGER: Duration = Duration::from_millis(100);

/// Remediation line under every inline error
pub const ERROR_REMEDIATION: &str = "Please try again or check if the server is running properly.";

pub const NO_EMOTIONS_TITLE: &str = "No strong emotions detected";
pub const NO_EMOTIONS_HINT: &str = "Try a different text with more emotional content.";

/// One horizontal bar in the ranked chart
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionBar {
    /// Raw key as received (used for color lookup)
    pub key: String,
    /// Display label, first character uppercased
    pub label: String,
    pub probability: f64,
    /// Fill width, `probability * 100` with one decimal, e.g. `"70.0%"`
    pub width: String,
    pub color: EmotionColor,
    /// Highest-scoring entry
    pub dominant: bool,
    /// Entrance delay (`BAR_STAGGER * index`)
    pub delay: Duration,
}

impl EmotionBar {
    /// Fill percentage as a number, for gauge widgets
    pub fn percent(&self) -> f64 {
        self.probability * 100.0
    }
}

/// Ranked emotions for one response
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEmotions {
    /// Truncated copy of the analyzed text
    pub excerpt: String,
    pub bars: Vec<EmotionBar>,
    /// Top three labels comma-joined; only set with more than one emotion
    pub summary: Option<String>,
}

impl RankedEmotions {
    pub fn dominant(&self) -> Option<&EmotionBar> {
        self.bars.iter().find(|b| b.dominant)
    }
}

/// Inline error panel content
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub message: String,
    pub remediation: &'static str,
}

impl ErrorView {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            remediation: ERROR_REMEDIATION,
        }
    }
}

/// Everything the result panel can show
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    NoEmotions,
    Ranked(RankedEmotions),
    Error(ErrorView),
}

impl ResultView {
    /// Plain-text rendering (no colors) for stdout and the clipboard
    pub fn to_plain_text(&self) -> String {
        match self {
            ResultView::NoEmotions => format!("{}\n{}\n", NO_EMOTIONS_TITLE, NO_EMOTIONS_HINT),
            ResultView::Error(err) => format!("Error: {}\n{}\n", err.message, err.remediation),
            ResultView::Ranked(ranked) => {
                let label_width = ranked
                    .bars
                    .iter()
                    .map(|b| b.label.width())
                    .max()
                    .unwrap_or(0);

                let mut out = String::from("Detected Emotions:\n");
                out.push_str(&format!("Analyzing text: \"{}\"\n\n", ranked.excerpt));
                for bar in &ranked.bars {
                    let pad = label_width.saturating_sub(bar.label.width());
                    out.push_str(&format!(
                        "{}{} {}{} {:>6}{}\n",
                        if bar.dominant { "* " } else { "  " },
                        bar.label,
                        " ".repeat(pad),
                        text_bar(bar.percent(), 30),
                        bar.width,
                        if bar.dominant { "  (dominant)" } else { "" },
                    ));
                }
                if let Some(summary) = &ranked.summary {
                    out.push_str(&format!("\nPrimary emotions: {}\n", summary));
                }
                out
            }
        }
    }
}

/// Build the view for a classifier response.
///
/// `analyzed_text` feeds the excerpt line; `excerpt_len` caps it (in chars).
pub fn render(scores: Option<&EmotionScores>, analyzed_text: &str, excerpt_len: usize) -> ResultView {
    let Some(scores) = scores.filter(|s| !s.is_empty()) else {
        return ResultView::NoEmotions;
    };

    // Stable sort: ties keep response order
    let mut entries: Vec<(&str, f64)> = scores.iter().collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    let bars: Vec<EmotionBar> = entries
        .iter()
        .enumerate()
        .map(|(index, (key, probability))| EmotionBar {
            key: key.to_string(),
            label: capitalize(key),
            probability: *probability,
            width: format!("{:.1}%", probability * 100.0),
            color: color_for(key),
            dominant: index == 0,
            delay: BAR_STAGGER * index as u32,
        })
        .collect();

    let summary = (bars.len() > 1).then(|| {
        bars.iter()
            .take(3)
            .map(|b| b.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    });

    ResultView::Ranked(RankedEmotions {
        excerpt: truncate_text(analyzed_text, excerpt_len),
        bars,
        summary,
    })
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep the first `max` chars, appending `...` when something was cut
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut)
}

fn text_bar(percent: f64, cells: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * cells as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::palette::{DEFAULT_COLOR, NEON_GREEN, NEON_MAGENTA};

    fn scores(entries: &[(&str, f64)]) -> EmotionScores {
        entries.iter().map(|(n, p)| (n.to_string(), *p)).collect()
    }

    fn ranked(view: ResultView) -> RankedEmotions {
        match view {
            ResultView::Ranked(r) => r,
            other => panic!("expected ranked view, got {:?}", other),
        }
    }

    #[test]
    fn joy_and_anger_ranked() {
        let view = render(Some(&scores(&[("anger", 0.3), ("joy", 0.7)])), "text", 60);
        let r = ranked(view);

        assert_eq!(r.bars[0].label, "Joy");
        assert_eq!(r.bars[0].width, "70.0%");
        assert!(r.bars[0].dominant);
        assert_eq!(r.bars[0].color, NEON_GREEN);

        assert_eq!(r.bars[1].label, "Anger");
        assert_eq!(r.bars[1].width, "30.0%");
        assert!(!r.bars[1].dominant);
        assert_eq!(r.bars[1].color, NEON_MAGENTA);

        assert_eq!(r.dominant().map(|b| b.key.as_str()), Some("joy"));
    }

    #[test]
    fn empty_or_missing_scores_show_placeholder() {
        assert_eq!(render(Some(&EmotionScores::default()), "x", 60), ResultView::NoEmotions);
        assert_eq!(render(None, "x", 60), ResultView::NoEmotions);
    }

    #[test]
    fn ties_keep_response_order() {
        let r = ranked(render(
            Some(&scores(&[("fear", 0.4), ("surprise", 0.4), ("joy", 0.9)])),
            "x",
            60,
        ));
        let keys: Vec<_> = r.bars.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["joy", "fear", "surprise"]);
    }

    #[test]
    fn nan_probability_still_sorts() {
        let r = ranked(render(
            Some(&scores(&[("joy", 0.5), ("fear", f64::NAN), ("anger", 0.2)])),
            "x",
            60,
        ));
        let keys: Vec<_> = r.bars.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(&keys[1..], &["joy", "anger"]);
    }

    #[test]
    fn delays_are_staggered() {
        let r = ranked(render(
            Some(&scores(&[("a", 0.3), ("b", 0.2), ("c", 0.1)])),
            "x",
            60,
        ));
        let delays: Vec<_> = r.bars.iter().map(|b| b.delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 100, 200]);
    }

    #[test]
    fn summary_lists_top_three_only_when_several() {
        let r = ranked(render(
            Some(&scores(&[
                ("joy", 0.9),
                ("love", 0.8),
                ("pride", 0.7),
                ("relief", 0.6),
            ])),
            "x",
            60,
        ));
        assert_eq!(r.summary.as_deref(), Some("Joy, Love, Pride"));

        let single = ranked(render(Some(&scores(&[("joy", 0.9)])), "x", 60));
        assert!(single.summary.is_none());
    }

    #[test]
    fn unknown_emotion_gets_fallback_color() {
        let r = ranked(render(Some(&scores(&[("awe", 0.5)])), "x", 60));
        assert_eq!(r.bars[0].color, DEFAULT_COLOR);
        assert_eq!(r.bars[0].label, "Awe");
    }

    #[test]
    fn color_lookup_uses_raw_key_case_insensitively() {
        let r = ranked(render(Some(&scores(&[("JOY", 0.5)])), "x", 60));
        assert_eq!(r.bars[0].color, NEON_GREEN);
        assert_eq!(r.bars[0].label, "JOY");
    }

    #[test]
    fn one_decimal_widths() {
        let r = ranked(render(Some(&scores(&[("joy", 0.12345), ("fear", 1.0)])), "x", 60));
        assert_eq!(r.bars[0].width, "100.0%");
        assert_eq!(r.bars[1].width, "12.3%");
    }

    #[test]
    fn capitalize_handles_edges() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("joy"), "Joy");
        assert_eq!(capitalize("éclat"), "Éclat");
    }

    #[test]
    fn excerpt_truncates_long_text() {
        assert_eq!(truncate_text("short", 60), "short");
        let long = "a".repeat(61);
        assert_eq!(truncate_text(&long, 60), format!("{}...", "a".repeat(60)));
    }

    #[test]
    fn plain_text_marks_dominant() {
        let view = render(Some(&scores(&[("joy", 0.7), ("anger", 0.3)])), "hi", 60);
        let text = view.to_plain_text();
        assert!(text.contains("* Joy"));
        assert!(text.contains("70.0%"));
        assert!(text.contains("Primary emotions: Joy, Anger"));
        assert!(text.contains("Analyzing text: \"hi\""));
    }
}
