// Input panel component
//
// Multi-line text area with the live character counter in the bottom border.
// No soft wrapping: the view scrolls to keep the cursor visible.

use crate::presenter::input::InputTracker;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Type or paste some text, then press Ctrl+Enter";

/// Row and display column of the cursor, given the text before it
pub fn cursor_position(before: &str) -> (u16, u16) {
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].width();
    (
        row.min(u16::MAX as usize) as u16,
        col.min(u16::MAX as usize) as u16,
    )
}

/// Scroll offset that keeps `pos` inside a viewport of `size`
fn follow(pos: u16, size: u16) -> u16 {
    if size == 0 {
        0
    } else {
        pos.saturating_sub(size - 1)
    }
}

pub fn render(f: &mut Frame, area: Rect, input: &InputTracker, theme: &Theme, focused: bool) {
    let border_color = if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let counter_style = if input.is_emphasized() {
        Style::default()
            .fg(theme.emphasis)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(" Text ")
        .title_bottom(
            Line::from(format!(" {} ", input.count_label()))
                .style(counter_style)
                .right_aligned(),
        );

    let inner = block.inner(area);
    let (before, _) = input.split_at_cursor();
    let (row, col) = cursor_position(before);
    let scroll = (follow(row, inner.height), follow(col, inner.width));

    let paragraph = if input.text().is_empty() {
        Paragraph::new(PLACEHOLDER).style(
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Paragraph::new(input.text())
            .style(Style::default().fg(theme.foreground))
            .scroll(scroll)
    };

    f.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(
            inner.x + col - scroll.1,
            inner.y + row - scroll.0,
        ));
    }
}
