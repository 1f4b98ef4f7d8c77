//! Toast notification overlay
//!
//! Renders the notifier's current toast in the bottom-right corner on top of
//! everything else. The exit transition is drawn dimmed.

use crate::presenter::notify::{Toast, ToastPhase};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Where the toast goes inside `area` (None when it would not fit)
pub fn toast_area(text: &str, area: Rect) -> Option<Rect> {
    // 2 for borders, 2 for padding
    let width = (text.width() as u16 + 4).min(area.width.saturating_sub(4));
    let height = 3;
    if width < 5 || area.height < height + 2 {
        return None;
    }

    let x = area.right().saturating_sub(width + 2);
    let y = area.bottom().saturating_sub(height + 2);
    Some(Rect::new(x, y, width, height))
}

pub fn render(f: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
    let phase = toast.phase();
    if matches!(phase, ToastPhase::Entering | ToastPhase::Gone) {
        return;
    }

    let text = format!("{} {}", toast.severity.icon(), toast.message);
    let Some(rect) = toast_area(&text, area) else {
        return;
    };

    let accent = theme.severity(toast.severity);
    let mut style = Style::default().fg(theme.foreground).bg(theme.background);
    if phase == ToastPhase::Exiting {
        style = style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(accent))
        .style(style);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(block);

    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_sits_in_bottom_right() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = toast_area("✓ Analysis complete!", area).unwrap();
        assert_eq!(rect.height, 3);
        assert_eq!(rect.right(), 78);
        assert_eq!(rect.bottom(), 22);
    }

    #[test]
    fn toast_is_clamped_to_narrow_areas() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = toast_area("ℹ a rather long notification message", area).unwrap();
        assert!(rect.width <= 16);

        assert!(toast_area("hi", Rect::new(0, 0, 6, 3)).is_none());
    }
}
