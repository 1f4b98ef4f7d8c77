// Result panel component
//
// One of three faces, picked by the presenter's visible panel:
// - Idle: particle backdrop with a short prompt
// - Loading: spinner
// - Result: ranked emotion bars, "no emotions" notice, or the inline error

use crate::presenter::render::{EmotionBar, ResultView, NO_EMOTIONS_HINT, NO_EMOTIONS_TITLE};
use crate::presenter::state::{Panel, UiState};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Time a bar takes to grow to full width once its stagger delay has passed
pub const BAR_GROW: Duration = Duration::from_millis(600);

const MIN_BAR_WIDTH: u16 = 5;

/// Fraction of a bar's final width shown `elapsed` after reveal
pub fn growth(elapsed: Option<Duration>, delay: Duration) -> f64 {
    let Some(elapsed) = elapsed else {
        return 1.0;
    };
    let since = elapsed.saturating_sub(delay);
    if elapsed <= delay {
        0.0
    } else {
        (since.as_secs_f64() / BAR_GROW.as_secs_f64()).min(1.0)
    }
}

/// Filled cells for a bar of `width` cells
fn filled_cells(bar: &EmotionBar, width: u16, growth: f64) -> u16 {
    let fraction = (bar.probability * growth).clamp(0.0, 1.0);
    ((fraction * width as f64).round() as u16).min(width)
}

fn bar_line(
    bar: &EmotionBar,
    label_width: usize,
    bar_width: u16,
    growth: f64,
    theme: &Theme,
) -> Line<'static> {
    let filled = filled_cells(bar, bar_width, growth);
    let color = theme.emotion(bar.color, bar.dominant);

    let mut label_style = Style::default().fg(theme.foreground);
    if bar.dominant {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let pad = label_width.saturating_sub(bar.label.width());
    Line::from(vec![
        Span::styled(
            if bar.dominant { "◆ " } else { "  " },
            Style::default().fg(color),
        ),
        Span::styled(format!("{}{} ", bar.label, " ".repeat(pad)), label_style),
        Span::styled("█".repeat(filled as usize), Style::default().fg(color)),
        Span::styled(
            "░".repeat((bar_width - filled) as usize),
            Style::default().fg(theme.bar_track),
        ),
        Span::styled(format!(" {:>6}", bar.width), label_style),
    ])
}

/// Lines for a result view, `elapsed` after it was revealed (None = fully grown)
pub fn result_lines(
    view: &ResultView,
    theme: &Theme,
    elapsed: Option<Duration>,
    width: u16,
) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.muted);

    match view {
        ResultView::NoEmotions => vec![
            Line::from(Span::styled(NO_EMOTIONS_TITLE, heading)),
            Line::from(Span::styled(NO_EMOTIONS_HINT, muted)),
        ],
        ResultView::Error(err) => vec![
            Line::from(Span::styled(
                "✗ Error",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                err.message.clone(),
                Style::default().fg(theme.foreground),
            )),
            Line::default(),
            Line::from(Span::styled(err.remediation, muted)),
        ],
        ResultView::Ranked(ranked) => {
            let label_width = ranked
                .bars
                .iter()
                .map(|b| b.label.width())
                .max()
                .unwrap_or(0);
            // prefix (2) + label + space + bar + " 100.0%" (7)
            let fixed = 2 + label_width as u16 + 1 + 7;
            let bar_width = width.saturating_sub(fixed).max(MIN_BAR_WIDTH);

            let mut lines = vec![
                Line::from(Span::styled("Detected Emotions", heading)),
                Line::from(Span::styled(
                    format!("Analyzing text: \"{}\"", ranked.excerpt),
                    muted.add_modifier(Modifier::ITALIC),
                )),
                Line::default(),
            ];

            lines.extend(ranked.bars.iter().map(|bar| {
                bar_line(
                    bar,
                    label_width,
                    bar_width,
                    growth(elapsed, bar.delay),
                    theme,
                )
            }));

            if let Some(summary) = &ranked.summary {
                lines.push(Line::default());
                lines.push(Line::from(vec![
                    Span::styled("Primary emotions: ", muted),
                    Span::styled(summary.clone(), heading),
                ]));
            }

            lines
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let theme = &app.theme;
    let state = app.presenter.ui_state();

    let border_color = if state == UiState::ErrorShown {
        theme.error
    } else if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(" Results ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match state.visible_panel() {
        Panel::Idle => render_idle(f, inner, app),
        Panel::Loading => render_loading(f, inner, app),
        Panel::Result => {
            let Some(view) = app.presenter.result() else {
                return;
            };
            let elapsed = app.presenter.revealed_at().map(|t| t.elapsed());
            let lines = result_lines(view, theme, elapsed, inner.width);
            let paragraph = Paragraph::new(lines).scroll((app.presenter.result_scroll(), 0));
            f.render_widget(paragraph, inner);
        }
    }
}

fn centered(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}

fn render_idle(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(
            "Emotion Analysis",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter some text to see its emotional breakdown",
            Style::default().fg(theme.muted),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(prompt, centered(area, 2));

    if theme.particles.is_empty() {
        return;
    }

    // Particles fill the blank cells around the prompt
    let buf = f.buffer_mut();
    for (x, y, particle) in app.particles.cells(area.width, area.height) {
        let pos = Position::new(area.x + x, area.y + y);
        if let Some(cell) = buf.cell_mut(pos) {
            if cell.symbol() == " " {
                let color = theme.particles[particle.color % theme.particles.len()];
                cell.set_char(particle.glyph).set_fg(color);
            }
        }
    }
}

fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let text = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", app.spinner_char()),
            Style::default().fg(app.theme.info),
        ),
        Span::styled(
            "Analyzing emotions...",
            Style::default().fg(app.theme.foreground),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(text, centered(area, 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::EmotionScores;
    use crate::presenter::render::{render as build_view, BAR_STAGGER};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn ranked() -> ResultView {
        let scores = EmotionScores::new(vec![
            ("joy".to_string(), 0.5),
            ("anger".to_string(), 0.25),
        ]);
        build_view(Some(&scores), "what a day", 60)
    }

    #[test]
    fn growth_respects_stagger() {
        let delay = BAR_STAGGER * 2;
        assert_eq!(growth(None, delay), 1.0);
        assert_eq!(growth(Some(Duration::from_millis(150)), delay), 0.0);
        assert!((growth(Some(delay + BAR_GROW / 2), delay) - 0.5).abs() < 1e-9);
        assert_eq!(growth(Some(delay + BAR_GROW * 3), delay), 1.0);
    }

    #[test]
    fn fully_grown_bars_scale_with_probability() {
        let lines = result_lines(&ranked(), &Theme::plain(), None, 40);
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(texts[0], "Detected Emotions");
        assert_eq!(texts[1], "Analyzing text: \"what a day\"");

        // 40 - (2 + 5 + 1 + 7) = 25 cells; joy at 50% fills 13 (rounded)
        let joy = &texts[3];
        assert!(joy.starts_with("◆ Joy   "));
        assert_eq!(joy.matches('█').count(), 13);
        assert!(joy.ends_with(" 50.0%"));

        let anger = &texts[4];
        assert!(anger.starts_with("  Anger "));
        assert_eq!(anger.matches('█').count(), 6);

        assert_eq!(texts.last().unwrap(), "Primary emotions: Joy, Anger");
    }

    #[test]
    fn bars_start_empty_right_after_reveal() {
        let lines = result_lines(&ranked(), &Theme::plain(), Some(Duration::ZERO), 40);
        let anger = line_text(&lines[4]);
        assert_eq!(anger.matches('█').count(), 0);
    }

    #[test]
    fn overfull_probability_is_clamped() {
        let scores = EmotionScores::new(vec![("joy".to_string(), 1.7)]);
        let view = build_view(Some(&scores), "!", 60);
        let lines = result_lines(&view, &Theme::plain(), None, 30);
        let joy = line_text(&lines[3]);
        assert!(!joy.contains('░'));
    }

    #[test]
    fn error_and_empty_views() {
        let theme = Theme::plain();
        let empty = result_lines(&ResultView::NoEmotions, &theme, None, 40);
        assert_eq!(line_text(&empty[0]), NO_EMOTIONS_TITLE);

        let error = ResultView::Error(crate::presenter::render::ErrorView::new("Model offline"));
        let lines = result_lines(&error, &theme, None, 40);
        assert_eq!(line_text(&lines[1]), "Model offline");
        assert!(line_text(&lines[3]).contains("try again"));
    }
}
